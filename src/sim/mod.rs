//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, fixed per-frame velocities
//! - Stable iteration order (column-major grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{FloorOutcome, check_floor, first_brick_hit, reflect_walls};
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickStatus, GameEvent, GamePhase, GameState, Paddle, brick_grid,
};
pub use tick::{StepInput, step};
