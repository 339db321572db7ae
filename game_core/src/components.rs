use glam::IVec2;

use crate::Aabb;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Human player
    Left,
    /// Computer player
    Right,
}

/// Paddle component - `pos` is the top-left corner, only `pos.y` moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub pos: IVec2,
    pub speed: i32, // units per tick
    pub score: u32,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    /// Score always starts at zero
    pub fn new(side: Side, pos: IVec2, width: i32, height: i32, speed: i32) -> Self {
        Self {
            side,
            pos,
            speed,
            score: 0,
            width,
            height,
        }
    }

    /// Collision box, edges inclusive
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + IVec2::new(self.width, self.height))
    }

    /// Vertical center used by the tracking policy
    pub fn center_y(&self) -> i32 {
        self.pos.y + self.height / 2
    }
}

/// Ball component - `pos` is the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2, // displacement per tick
    pub radius: i32,
    pub bounce_counter: u32, // paddle contacts since the last goal
    ramped_at: u32,          // counter value that last raised the speed
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, radius: i32, bounce_counter: u32) -> Self {
        Self {
            pos,
            vel,
            radius,
            bounce_counter,
            ramped_at: 0,
        }
    }

    /// Overwrite every field, as after a goal
    pub fn reset(&mut self, pos: IVec2, vel: IVec2, radius: i32) {
        *self = Self::new(pos, vel, radius, 0);
    }

    /// Every second paddle contact adds one to |vel.x|, capped at `max`.
    /// Each even counter value ramps once, however many ticks it lasts.
    pub fn ramp_speed(&mut self, max: i32) {
        if self.bounce_counter > 0
            && self.bounce_counter % 2 == 0
            && self.bounce_counter != self.ramped_at
        {
            self.ramped_at = self.bounce_counter;
            let magnitude = (self.vel.x.abs() + 1).min(max);
            self.vel.x = if self.vel.x > 0 { magnitude } else { -magnitude };
        }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_paddle_has_zero_score() {
        let paddle = Paddle::new(Side::Left, IVec2::new(10, 180), 10, 120, 5);
        assert_eq!(paddle.score, 0);
        assert_eq!(paddle.center_y(), 240);
    }

    #[test]
    fn test_reset_clears_bounce_counter() {
        let mut ball = Ball::new(IVec2::new(3, 4), IVec2::new(-9, 2), 5, 8);
        ball.ramp_speed(10);
        ball.reset(IVec2::new(320, 240), IVec2::new(2, 2), 5);
        assert_eq!(ball, Ball::new(IVec2::new(320, 240), IVec2::new(2, 2), 5, 0));
    }

    #[test]
    fn test_ramp_only_on_even_nonzero_counter() {
        let mut ball = Ball::new(IVec2::ZERO, IVec2::new(2, 2), 5, 0);
        ball.ramp_speed(10);
        assert_eq!(ball.vel.x, 2, "No ramp before any contact");

        ball.bounce_counter = 1;
        ball.ramp_speed(10);
        assert_eq!(ball.vel.x, 2, "No ramp on odd counter");

        ball.bounce_counter = 2;
        ball.ramp_speed(10);
        assert_eq!(ball.vel.x, 3);
    }

    #[test]
    fn test_ramp_once_per_even_count() {
        let mut ball = Ball::new(IVec2::ZERO, IVec2::new(2, 2), 5, 2);
        for _ in 0..20 {
            ball.ramp_speed(10);
        }
        assert_eq!(ball.vel.x, 3, "Counter 2 ramps a single time");

        ball.bounce_counter = 3;
        ball.ramp_speed(10);
        ball.bounce_counter = 4;
        ball.ramp_speed(10);
        ball.ramp_speed(10);
        assert_eq!(ball.vel.x, 4);
    }

    #[test]
    fn test_ramp_preserves_sign() {
        let mut ball = Ball::new(IVec2::ZERO, IVec2::new(-4, 2), 5, 2);
        ball.ramp_speed(10);
        assert_eq!(ball.vel.x, -5);
    }

    #[test]
    fn test_ramp_caps_magnitude() {
        let mut ball = Ball::new(IVec2::ZERO, IVec2::new(-9, 2), 5, 0);
        for count in [2, 4, 6, 8] {
            ball.bounce_counter = count;
            ball.ramp_speed(10);
        }
        assert_eq!(ball.vel.x, -10, "Speed must stay at the cap");
        assert_eq!(ball.vel.y, 2, "Ramp never touches vel.y");
    }
}
