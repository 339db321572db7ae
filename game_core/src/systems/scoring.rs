use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Check if the ball reached a goal line
///
/// Credits the opposing paddle, re-serves the ball from the center and
/// returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - ball.radius <= 0 {
            // Right player scores
            scorer = Some(Side::Right);
            events.right_scored = true;
        } else if ball.pos.x + ball.radius >= map.width {
            // Left player scores
            scorer = Some(Side::Left);
            events.left_scored = true;
        } else {
            continue;
        }

        ball.reset(
            map.ball_spawn(),
            glam::IVec2::new(config.ball_vel_x, config.ball_vel_y),
            config.ball_radius,
        );
    }

    let side = scorer?;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.score += 1;
            tracing::debug!(?side, score = paddle.score, "goal");
        }
    }
    Some(side)
}
