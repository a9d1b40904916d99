/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as board size,
/// frame rate, paddle speed and ball speed.
pub const DEFAULT_WIDTH: usize = 60; // Board width in cells.

/// Board height in cells.
pub const DEFAULT_HEIGHT: usize = 18;

/// How far a paddle extends above and below its centre, in cells.
pub const DEFAULT_EXTEND: usize = 1;

/// Frames per second of the game loop.
pub const DEFAULT_FPS: u32 = 10;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 120;

/// Smallest accepted board width.
pub const MIN_WIDTH: usize = 4;

/// Largest accepted board width.
pub const MAX_WIDTH: usize = 1000;

/// Largest accepted board height.
pub const MAX_HEIGHT: usize = 500;

/// Paddle speed in cells per second.
pub const PADDLE_SPEED: f64 = 12.0;

/// Range of the initial horizontal ball speed (absolute value).
pub const BALL_SPEED_X: std::ops::Range<f64> = 10.0..20.0;

/// Range of the initial vertical ball speed.
pub const BALL_SPEED_Y: std::ops::Range<f64> = -6.0..6.0;

/// Multiplier applied to the ball velocity on every frame.
pub const VELOCITY_INCREASE: f64 = 1.003;
