/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: i32 = 640;
    pub const ARENA_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 120;
    pub const PADDLE_SPEED: i32 = 5; // units per tick
    pub const PADDLE_INSET: i32 = 10; // gap between paddle and goal line

    // Ball
    pub const BALL_RADIUS: i32 = 5;
    pub const BALL_VEL_X: i32 = 2;
    pub const BALL_VEL_Y: i32 = 2;
    pub const BALL_SPEED_MAX: i32 = 10; // cap on |vel.x|

    // Timing
    pub const TICK_RATE: u32 = 144; // ticks per second
}
