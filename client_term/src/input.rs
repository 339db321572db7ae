//! Keyboard input handling
//!
//! Terminals only report key releases when the keyboard enhancement protocol
//! is active. Without it a key counts as held for a short window after its
//! last press or auto-repeat event.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::Controls;

/// Hold window after the first press; covers the auto-repeat delay
const PRESS_HOLD: Duration = Duration::from_millis(500);
/// Hold window after an auto-repeat event
const REPEAT_HOLD: Duration = Duration::from_millis(100);

/// Logical controls understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Start,
    Pause,
    Quit,
}

/// Map a key to a control
pub fn map_key(event: &KeyEvent) -> Option<Control> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Control::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Down),
        KeyCode::Char(' ') => Some(Control::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Control::Pause),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Control::Quit),
        _ => None,
    }
}

/// Tracks which controls are currently held
#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Control -> time it stops counting as held (None = until released)
    held: HashMap<Control, Option<Instant>>,
    reports_release: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, event: &KeyEvent, now: Instant) {
        let Some(control) = map_key(event) else {
            return;
        };

        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if control == Control::Quit {
                    tracing::info!("quit requested");
                    self.quit = true;
                    return;
                }
                let until = if self.reports_release {
                    None
                } else if event.kind == KeyEventKind::Press {
                    Some(now + PRESS_HOLD)
                } else {
                    Some(now + REPEAT_HOLD)
                };
                if !self.reports_release {
                    // Only one direction can auto-repeat at a time
                    match control {
                        Control::Up => self.held.remove(&Control::Down),
                        Control::Down => self.held.remove(&Control::Up),
                        _ => None,
                    };
                }
                self.held.insert(control, until);
            }
            KeyEventKind::Release => {
                self.held.remove(&control);
            }
        }
    }

    pub fn is_held(&self, control: Control, now: Instant) -> bool {
        match self.held.get(&control) {
            Some(None) => true,
            Some(Some(until)) => now <= *until,
            None => false,
        }
    }

    /// Snapshot of the held controls for one tick
    pub fn controls(&self, now: Instant) -> Controls {
        Controls {
            up: self.is_held(Control::Up, now),
            down: self.is_held(Control::Down, now),
            start: self.is_held(Control::Start, now),
            pause: self.is_held(Control::Pause, now),
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
