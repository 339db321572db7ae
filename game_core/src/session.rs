use hecs::World;

use crate::systems::*;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Controls, Events, GameAction, GameFsm,
    GameMap, GameState, Paddle, Side, Snapshot,
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub state: GameState,
    pub scored: Option<Side>,
    pub winner: Option<Side>,
}

/// One match: both paddles, the ball and the state machine
///
/// The session is the only writer; front ends read it between ticks.
pub struct MatchSession {
    world: World,
    map: GameMap,
    config: Config,
    fsm: GameFsm,
    events: Events,
    tick: u64,
    start_held: bool,
    pause_held: bool,
}

impl MatchSession {
    pub fn new(config: Config) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        create_paddle(&mut world, &config, &map, Side::Left);
        create_paddle(&mut world, &config, &map, Side::Right);
        create_ball(
            &mut world,
            map.ball_spawn(),
            glam::IVec2::new(config.ball_vel_x, config.ball_vel_y),
            config.ball_radius,
        );

        Self {
            world,
            map,
            config,
            fsm: GameFsm::new(),
            events: Events::new(),
            tick: 0,
            start_held: false,
            pause_held: false,
        }
    }

    /// Advance the match by exactly one tick
    pub fn tick(&mut self, controls: &Controls) -> TickOutcome {
        self.tick += 1;
        self.events.clear();

        let start_pressed = controls.start && !self.start_held;
        let pause_pressed = controls.pause && !self.pause_held;
        self.start_held = controls.start;
        self.pause_held = controls.pause;

        // 1. Input-driven transitions. Start is level-triggered in the menu.
        match self.fsm.state() {
            GameState::Menu if controls.start => {
                self.fsm.transition(GameAction::Start);
            }
            GameState::GameOver if start_pressed => {
                self.fsm.transition(GameAction::Start);
                self.reset_match();
            }
            GameState::Playing | GameState::Paused if pause_pressed => {
                self.fsm.transition(GameAction::Pause);
            }
            _ => {}
        }

        let mut outcome = TickOutcome {
            state: self.fsm.state(),
            scored: None,
            winner: None,
        };
        if !self.fsm.is_playing() {
            return outcome;
        }

        // 2. Human paddle, ball, then computer paddle
        ingest_controls(&mut self.world, controls, Side::Left);
        move_paddles(&mut self.world, &self.map, Side::Left);

        let scored = step(&mut self.world, &self.map, &self.config, &mut self.events);

        drive_computer(&mut self.world, Side::Right);
        move_paddles(&mut self.world, &self.map, Side::Right);

        // 3. Goal-driven transitions
        if let Some(side) = scored {
            let won = self
                .config
                .win_score
                .is_some_and(|target| self.score(side) >= target);
            if won {
                tracing::info!(winner = ?side, "match won");
                self.fsm.transition(GameAction::MatchWon);
                outcome.winner = Some(side);
            } else {
                self.fsm.transition(GameAction::Goal);
            }
            outcome.scored = Some(side);
        }

        outcome.state = self.fsm.state();
        outcome
    }

    /// Zero the scores and put every entity back on its spawn
    fn reset_match(&mut self) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.score = 0;
            paddle.pos = self.map.paddle_spawn(paddle.side);
        }
        let vel = glam::IVec2::new(self.config.ball_vel_x, self.config.ball_vel_y);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(self.map.ball_spawn(), vel, self.config.ball_radius);
        }
        tracing::info!("new match");
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Events raised by the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Mutable world access, for setting up scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn score(&self, side: Side) -> u32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map_or(0, |(_e, p)| p.score)
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            tick: self.tick,
            state: self.fsm.state(),
            arena_width: self.map.width,
            arena_height: self.map.height,
            ..Snapshot::default()
        };

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.left = paddle.into(),
                Side::Right => snapshot.right = paddle.into(),
            }
        }
        if let Some((_e, ball)) = self.world.query::<&Ball>().iter().next() {
            snapshot.ball = ball.into();
        }

        snapshot
    }
}
