pub const WORLD_WIDTH: f32 = 640.0;
pub const WORLD_HEIGHT: f32 = 360.0;

pub const BLOCK_ROWS: usize = 6;
pub const BLOCK_COLS: usize = 8;
pub const BLOCK_WIDTH: f32 = 60.0;
pub const BLOCK_HEIGHT: f32 = 20.0;
pub const BLOCK_PITCH_X: f32 = 64.0;
pub const BLOCK_PITCH_Y: f32 = 24.0;
pub const BLOCK_ORIGIN_X: f32 = 65.0;
pub const BLOCK_ORIGIN_Y: f32 = 35.0;

pub const PADDLE_X: f32 = 245.0;
pub const PADDLE_Y: f32 = 300.0;
pub const PADDLE_WIDTH: f32 = 150.0;
pub const PADDLE_HEIGHT: f32 = 20.0;
pub const PADDLE_SPEED: f32 = 6.0;

pub const BALL_X: f32 = 310.0;
pub const BALL_Y: f32 = 280.0;
pub const BALL_SIZE: f32 = 20.0;
pub const BALL_SPEED: f32 = 3.0;

pub const SCORE_TEXT_X: i32 = 15;
pub const SCORE_TEXT_Y: i32 = 20;
pub const SCORE_FONT_SIZE: i32 = 20;

pub const TARGET_FPS: u32 = 60;
