use crate::{Ball, Config, GameMap, Paddle, PaddleIntent, Side};
use hecs::World;

/// Move a paddle one step in `dir` and clamp it to the arena
pub fn update_player(paddle: &mut Paddle, dir: i8, map: &GameMap) {
    paddle.pos.y += dir as i32 * paddle.speed;
    paddle.pos.y = map.clamp_paddle_y(paddle.pos.y, paddle.height);
}

/// Apply paddle movement for one side based on its intent
pub fn move_paddles(world: &mut World, map: &GameMap, side: Side) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if paddle.side == side {
            update_player(paddle, intent.dir, map);
        }
    }
}

/// Ramp the ball's speed, then advance it by one tick
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.ramp_speed(config.ball_speed_max);
        ball.pos += ball.vel;
    }
}
