use crate::{collide, Aabb, Ball, Events, GameMap, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
///
/// Walls reverse `vel.y`; each overlapping paddle reverses `vel.x` and counts
/// a bounce. Neither pushes the ball back out.
pub fn check_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    // Collect paddle boxes first, left before right
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.aabb()))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        if ball.pos.y - ball.radius <= 0 || ball.pos.y + ball.radius >= map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Paddles are checked independently; overlapping both bounces twice
        for (side, paddle) in &paddles {
            if collide(paddle, &ball_box(ball)) {
                ball.bounce_counter += 1;
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
                tracing::trace!(?side, bounces = ball.bounce_counter, "ball hit paddle");
            }
        }
    }
}

fn ball_box(ball: &Ball) -> Aabb {
    Aabb::around_circle(ball.pos, ball.radius)
}
