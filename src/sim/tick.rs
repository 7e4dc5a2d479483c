//! Per-frame simulation step
//!
//! `step` advances the game by exactly one frame. It is deterministic: the
//! same state and input always produce the same result, and nothing outside
//! `GameState` is touched.

use super::collision::{FloorOutcome, check_floor, first_brick_hit, reflect_walls};
use super::state::{BrickStatus, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input intent for a single step, sampled by the controller once per frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInput {
    /// Left direction key held
    pub left: bool,
    /// Right direction key held
    pub right: bool,
    /// Relative paddle movement in field units (touch drag), already scaled
    pub paddle_delta: Option<f32>,
    /// Absolute paddle-center target in field units (mouse)
    pub paddle_target: Option<f32>,
}

/// Advance the game state by one frame. No-op unless the phase is Running;
/// the Paused hold and GameOver are left exactly as they are so the
/// renderer keeps drawing a static frame.
pub fn step(state: &mut GameState, input: &StepInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Paddle movement: held keys, then pointer intent, always clamped
    if input.left {
        state.paddle.shift(-PADDLE_KEY_SPEED);
    }
    if input.right {
        state.paddle.shift(PADDLE_KEY_SPEED);
    }
    if let Some(delta) = input.paddle_delta {
        state.paddle.shift(delta);
    }
    if let Some(target) = input.paddle_target {
        state.paddle.move_center_to(target);
    }

    // Brick collision: first active brick containing the ball center.
    // One brick per step, even if the ball grazes a second rect.
    if let Some(hit) = first_brick_hit(&state.ball, &state.bricks) {
        state.ball.vel.y = -state.ball.vel.y;
        state.bricks[hit].status = BrickStatus::Destroyed;
        state.score += SCORE_PER_BRICK;
        let score = state.score;
        state.push_event(GameEvent::ScoreChanged { score });
    }

    // Level clear: speed up and bring the whole grid back
    if state.active_bricks() == 0 {
        state.level += 1;
        state.ball.vel *= LEVEL_SPEED_FACTOR;
        state.reset_bricks();
        let level = state.level;
        state.push_event(GameEvent::LevelChanged { level });
        log::info!("level {} reached, ball speed x{}", level, LEVEL_SPEED_FACTOR);
    }

    // Side and top walls
    reflect_walls(&mut state.ball);

    // Floor line: rebound off the paddle or lose the ball
    match check_floor(&state.ball, &state.paddle) {
        FloorOutcome::PaddleBounce => state.ball.vel.y = -state.ball.vel.y,
        FloorOutcome::Lost => lose_life(state),
        FloorOutcome::Clear => {}
    }

    // Advance only if the floor check left us Running
    if state.phase == GamePhase::Running {
        state.ball.pos += state.ball.vel;
    }
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    let lives = state.lives;
    state.push_event(GameEvent::LivesChanged { lives });
    if lives == 0 {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver {
            score: state.score,
            level: state.level,
            lives: 0,
        });
        log::info!(
            "game over at score {}, level {}",
            state.score,
            state.level
        );
    } else {
        state.phase = GamePhase::Paused;
        state.push_event(GameEvent::LifeLost {
            lives_remaining: lives,
        });
        log::info!("ball lost, {} lives remaining", lives);
    }
}
