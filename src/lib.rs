//! Break'em - a breakout arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Input, timing and render-sink seams for a host loop
//! - `audio`: Sine tone synthesis triggered from game events
//! - `settings`: Host preferences loaded from JSON

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Geometry is fixed at compile time; nothing here is read from settings.
pub mod consts {
    /// Logical field size
    pub const GAME_WIDTH: i32 = 500;
    pub const GAME_HEIGHT: i32 = 500;

    /// Wall thickness (left, right and top only; the bottom is open)
    pub const WALL_SIZE: i32 = 25;
    pub const LEFT_WALL: i32 = WALL_SIZE;
    pub const RIGHT_WALL: i32 = GAME_WIDTH - WALL_SIZE;
    pub const TOP_WALL: i32 = WALL_SIZE;

    /// Brick defaults
    pub const BRICK_WIDTH: i32 = WALL_SIZE * 2;
    pub const BRICK_HEIGHT: i32 = WALL_SIZE;
    pub const BRICK_COUNT: i32 = 9;
    pub const BRICK_ROW_Y: i32 = WALL_SIZE * 4;

    /// Paddle defaults (speeds are per frame)
    pub const PADDLE_WIDTH: i32 = WALL_SIZE * 4;
    pub const PADDLE_HEIGHT: i32 = WALL_SIZE / 2;
    pub const PADDLE_SPEED: i32 = 5;
    pub const PADDLE_MAX_SPEED: i32 = 10;
    pub const PADDLE_DECEL: i32 = 2;

    /// Ball defaults (speed is per axis, per frame)
    pub const BALL_WIDTH: i32 = 5;
    pub const BALL_HEIGHT: i32 = BALL_WIDTH;
    pub const BALL_MAX_SPEED: i32 = 10;

    /// Lives at the start of a run
    pub const START_LIVES: u8 = 5;
}

/// Bound `value` to `[min, max]`
#[inline]
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
