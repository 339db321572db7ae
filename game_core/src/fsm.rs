//! Game State Machine
//!
//! Menu → Playing → (Paused) → GameOver, driven by player input and goals.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Start screen, simulation halted
    #[default]
    Menu,
    Playing,
    Paused,
    /// A side reached the configured win score
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Goal,
    MatchWon,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; rejected actions leave the state untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                tracing::debug!(from = ?from_state, to = ?next_state, ?action, "state transition");
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Menu, GameAction::Start) => Some(GameState::Playing),

            (GameState::Playing, GameAction::Goal) => Some(GameState::Menu),
            (GameState::Playing, GameAction::Pause) => Some(GameState::Paused),
            (GameState::Playing, GameAction::MatchWon) => Some(GameState::GameOver),

            (GameState::Paused, GameAction::Pause) => Some(GameState::Playing),

            (GameState::GameOver, GameAction::Start) => Some(GameState::Menu),

            _ => None,
        }
    }

    /// Check if the simulation should advance
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [GameAction; 4] = [
        GameAction::Start,
        GameAction::Pause,
        GameAction::Goal,
        GameAction::MatchWon,
    ];

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Menu);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_only_start_leaves_menu() {
        for action in ALL_ACTIONS {
            let mut fsm = GameFsm::new();
            let result = fsm.transition(action);
            if action == GameAction::Start {
                assert!(result.success);
                assert_eq!(fsm.state(), GameState::Playing);
            } else {
                assert!(!result.success, "{action:?} must not leave Menu");
                assert_eq!(result.to_state, GameState::Menu);
                assert_eq!(fsm.state(), GameState::Menu);
            }
        }
    }

    #[test]
    fn test_goal_returns_to_menu() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        let result = fsm.transition(GameAction::Goal);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Playing);
        assert_eq!(fsm.state(), GameState::Menu);
    }

    #[test]
    fn test_pause_toggles() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Pause);
        assert_eq!(fsm.state(), GameState::Paused);
        assert!(!fsm.can_transition(GameAction::Goal), "No goals while paused");
        assert!(!fsm.can_transition(GameAction::Start));
        fsm.transition(GameAction::Pause);
        assert_eq!(fsm.state(), GameState::Playing);
    }

    #[test]
    fn test_match_won_then_new_match() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::MatchWon);
        assert_eq!(fsm.state(), GameState::GameOver);
        assert!(!fsm.can_transition(GameAction::Pause));
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state(), GameState::Menu);
    }
}
