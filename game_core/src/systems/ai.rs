use crate::{Ball, Paddle, PaddleIntent, Side};
use hecs::World;

/// Tracking policy: head toward the ball's height, no dead zone
pub fn computer_direction(ball: &Ball, paddle: &Paddle) -> i8 {
    if ball.pos.y > paddle.center_y() {
        1
    } else {
        -1
    }
}

/// Set the intent of every paddle on `side` from the ball position
pub fn drive_computer(world: &mut World, side: Side) {
    let ball = match world.query_mut::<&Ball>().into_iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dir = computer_direction(&ball, paddle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, GameMap};
    use glam::IVec2;

    fn ball_at_y(y: i32) -> Ball {
        Ball::new(IVec2::new(320, y), IVec2::new(2, 2), 5, 0)
    }

    fn right_paddle(y: i32) -> Paddle {
        Paddle::new(Side::Right, IVec2::new(620, y), 10, 120, 5)
    }

    #[test]
    fn test_moves_down_when_ball_below_center() {
        assert_eq!(computer_direction(&ball_at_y(300), &right_paddle(180)), 1);
    }

    #[test]
    fn test_moves_up_when_ball_above_center() {
        assert_eq!(computer_direction(&ball_at_y(100), &right_paddle(180)), -1);
    }

    #[test]
    fn test_aligned_moves_up() {
        // Center of a paddle at 180 is 240; no dead zone
        assert_eq!(computer_direction(&ball_at_y(240), &right_paddle(180)), -1);
    }

    #[test]
    fn test_drive_computer_sets_intent_for_side_only() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let left = create_paddle(&mut world, &config, &map, Side::Left);
        let right = create_paddle(&mut world, &config, &map, Side::Right);
        create_ball(&mut world, IVec2::new(320, 400), IVec2::new(2, 2), 5);

        drive_computer(&mut world, Side::Right);

        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 1);
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
    }

    #[test]
    fn test_drive_computer_without_ball() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let right = create_paddle(&mut world, &config, &map, Side::Right);

        drive_computer(&mut world, Side::Right);

        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 0);
    }
}
