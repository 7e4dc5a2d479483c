//! Brickout - a browser brick-breaker game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game_loop`: Frame-driven controller bridging host input and the sim
//! - `render`: Renderer contract plus the Canvas-2D implementation
//! - `settings`: Game configuration with LocalStorage persistence

pub mod game_loop;
pub mod render;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, InputState};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size in canvas units
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch velocity in field units per frame
    pub const BALL_LAUNCH_DX: f32 = 2.0;
    pub const BALL_LAUNCH_DY: f32 = -2.0;
    /// Gap between the floor and the spawned ball center
    pub const BALL_SPAWN_HEIGHT: f32 = 30.0;

    /// Paddle defaults - the paddle sits flush with the floor
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_DEFAULT_WIDTH: f32 = 75.0;
    pub const PADDLE_MIN_WIDTH: f32 = 20.0;
    pub const PADDLE_MAX_WIDTH: f32 = 300.0;
    /// Paddle travel per frame while a direction key is held
    pub const PADDLE_KEY_SPEED: f32 = 7.0;

    /// Brick grid layout
    pub const BRICK_COLS: usize = 5;
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Scoring and progression
    pub const SCORE_PER_BRICK: u64 = 10;
    /// Velocity multiplier applied to both axes on level-up
    pub const LEVEL_SPEED_FACTOR: f32 = 1.2;
    pub const DEFAULT_LIVES: u8 = 3;
}
