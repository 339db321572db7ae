use glam::IVec2;

use crate::{Config, Side};

/// Axis-aligned bounding box with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2, // left, top
    pub max: IVec2, // right, bottom
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(IVec2::new(left, top), IVec2::new(right, bottom))
    }

    /// Box enclosing a circle
    pub fn around_circle(center: IVec2, radius: i32) -> Self {
        let r = IVec2::splat(radius);
        Self::new(center - r, center + r)
    }

    /// Overlap test; boxes sharing an edge count as touching
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }
}

/// Axis-aligned rectangle overlap
pub fn collide(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Playfield bounds and spawn points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    paddle_width: i32,
    paddle_height: i32,
    paddle_inset: i32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            paddle_inset: config.paddle_inset,
        }
    }

    /// Center of the field, where the ball starts and respawns
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Top-left corner of a paddle at the start of a match
    pub fn paddle_spawn(&self, side: Side) -> IVec2 {
        let x = match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width - self.paddle_inset - self.paddle_width,
        };
        IVec2::new(x, self.height / 2 - self.paddle_height / 2)
    }

    /// Keep a paddle of `height` fully inside the field
    pub fn clamp_paddle_y(&self, y: i32, height: i32) -> i32 {
        if y < 0 {
            0
        } else if y + height > self.height {
            self.height - height
        } else {
            y
        }
    }
}
