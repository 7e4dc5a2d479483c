//! Canvas-2D renderer
//!
//! Draws the playfield onto a browser canvas. Colors come from the game
//! config; geometry comes straight from the snapshot.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::consts::*;
use crate::settings::GameConfig;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    config: GameConfig,
}

impl CanvasRenderer {
    /// Returns None if the canvas has no 2D context to offer
    pub fn new(canvas: &HtmlCanvasElement, config: GameConfig) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx, config })
    }

    /// Swap in the config for a new run (colors may have changed)
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    fn draw_background(&self) {
        self.ctx.set_fill_style_str(&self.config.background_color);
        self.ctx
            .fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
    }

    fn draw_hud(&self, state: &GameState) {
        self.ctx.set_font("16px Arial");
        self.ctx.set_fill_style_str(&self.config.ball_color);
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), 8.0, 20.0);
        let _ = self.ctx.fill_text(
            &format!("Lives: {}", state.lives),
            FIELD_WIDTH as f64 / 2.0 - 28.0,
            20.0,
        );
        let _ = self.ctx.fill_text(
            &format!("Level: {}", state.level),
            FIELD_WIDTH as f64 - 70.0,
            20.0,
        );
    }

    fn draw_bricks(&self, state: &GameState) {
        for brick in state.bricks.iter().filter(|b| b.is_active()) {
            self.ctx.begin_path();
            self.ctx
                .set_fill_style_str(self.config.brick_color(brick.row));
            self.ctx.rect(
                brick.rect.x as f64,
                brick.rect.y as f64,
                brick.rect.width as f64,
                brick.rect.height as f64,
            );
            self.ctx.fill();
            self.ctx.close_path();
        }
    }

    fn draw_paddle(&self, state: &GameState) {
        let rect = state.paddle.rect();
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&self.config.paddle_color);
        self.ctx.rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_ball(&self, state: &GameState) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&self.config.ball_color);
        self.ctx.fill();
        self.ctx.close_path();
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState) {
        self.draw_background();
        self.draw_hud(state);
        self.draw_bricks(state);
        self.draw_paddle(state);
        self.draw_ball(state);
    }
}
