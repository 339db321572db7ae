pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one deterministic simulation step of the ball
///
/// Returns the side that scored, if any. Paddles are moved by the caller.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    // 1-2. Speed progression and integration
    move_ball(world, config);

    // 3-4. Walls, then left and right paddle
    check_collisions(world, map, events);

    // 5. Goals
    check_scoring(world, map, config, events)
}

/// Helper to create a paddle entity on its spawn point
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    map: &GameMap,
    side: Side,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        map.paddle_spawn(side),
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::IVec2,
    vel: glam::IVec2,
    radius: i32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius, 0),))
}
