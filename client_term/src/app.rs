//! Fixed-rate game loop

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use game_core::{Config, Events, GameState, MatchSession, Side, TickOutcome};

use crate::input::KeyTracker;
use crate::render;
use crate::terminal::Tui;

/// Ticks run back to back before the backlog is dropped
const MAX_CATCH_UP: u32 = 5;
/// Redraws are capped independently of the tick rate
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    session: MatchSession,
    keys: KeyTracker,
    tick_interval: Duration,
}

impl App {
    pub fn new(config: Config, reports_release: bool) -> Self {
        let tick_interval = config.tick_interval();
        Self {
            session: MatchSession::new(config),
            keys: KeyTracker::new(reports_release),
            tick_interval,
        }
    }

    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut next_tick = Instant::now();
        let mut last_frame: Option<Instant> = None;

        while !self.keys.quit_requested() {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout).context("failed to poll terminal events")? {
                match event::read().context("failed to read terminal event")? {
                    Event::Key(key) => self.keys.handle(&key, Instant::now()),
                    Event::Resize(..) => last_frame = None,
                    _ => {}
                }
                continue;
            }

            let now = Instant::now();
            let mut ran = 0;
            while now >= next_tick && ran < MAX_CATCH_UP {
                self.tick(now);
                next_tick += self.tick_interval;
                ran += 1;
            }
            if now >= next_tick {
                tracing::trace!("dropping tick backlog");
                next_tick = now + self.tick_interval;
            }

            if last_frame.map_or(true, |t| now.duration_since(t) >= FRAME_INTERVAL) {
                let snapshot = self.session.snapshot();
                terminal
                    .draw(|frame| render::draw(frame, &snapshot))
                    .context("failed to draw frame")?;
                last_frame = Some(now);
            }
        }

        tracing::info!(
            ticks = self.session.ticks(),
            left = self.session.score(Side::Left),
            right = self.session.score(Side::Right),
            "leaving game"
        );
        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        let controls = self.keys.controls(now);
        let before = self.session.state();
        let outcome = self.session.tick(&controls);
        log_outcome(before, &outcome, self.session.events());
    }
}

fn log_outcome(before: GameState, outcome: &TickOutcome, events: &Events) {
    if events.ball_hit_paddle || events.ball_hit_wall {
        tracing::trace!(paddle = events.ball_hit_paddle, wall = events.ball_hit_wall, "bounce");
    }
    if let Some(side) = outcome.scored {
        tracing::info!(scorer = ?side, "goal");
    }
    if before != outcome.state {
        tracing::debug!(from = ?before, to = ?outcome.state, "state changed");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_tick_uses_held_keys() {
        let mut app = App::new(Config::new(), true);
        let now = Instant::now();
        let press = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        app.keys.handle(&press(' '), now);
        app.keys.handle(&press('w'), now);

        app.tick(now);
        app.tick(now);

        let snapshot = app.session.snapshot();
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.left.y, 170, "Two ticks of upward movement");
    }

    #[test]
    fn test_tick_interval_from_config() {
        let config = Config {
            tick_rate: 100,
            ..Config::new()
        };
        let app = App::new(config, false);
        assert_eq!(app.tick_interval, Duration::from_millis(10));
    }
}
