//! Read-only view of a match for rendering

use crate::{Ball, GameState, Paddle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleView {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub score: u32,
}

impl From<&Paddle> for PaddleView {
    fn from(p: &Paddle) -> Self {
        Self {
            x: p.pos.x,
            y: p.pos.y,
            width: p.width,
            height: p.height,
            score: p.score,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallView {
    pub x: i32,
    pub y: i32,
    pub vel_x: i32,
    pub vel_y: i32,
    pub radius: i32,
    pub bounce_counter: u32,
}

impl From<&Ball> for BallView {
    fn from(b: &Ball) -> Self {
        Self {
            x: b.pos.x,
            y: b.pos.y,
            vel_x: b.vel.x,
            vel_y: b.vel.y,
            radius: b.radius,
            bounce_counter: b.bounce_counter,
        }
    }
}

/// Post-tick state of the whole match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub tick: u64,
    pub state: GameState,
    pub arena_width: i32,
    pub arena_height: i32,
    pub left: PaddleView,
    pub right: PaddleView,
    pub ball: BallView,
}
