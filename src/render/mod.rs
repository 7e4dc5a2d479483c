//! Renderer contract
//!
//! The simulation never draws. Once per frame the host hands the current
//! snapshot to a `Renderer`; the expected layering is background, HUD,
//! bricks, paddle, ball. Order matters only for visuals, never for the
//! simulation.

use crate::sim::GameState;

/// Draws one frame from an immutable snapshot
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
