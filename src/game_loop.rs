//! Frame-driven game controller
//!
//! `GameLoop` owns one `GameState` plus the input intent buffers. The host
//! wires raw events (key up/down, mouse move, touch drag) into `InputState`
//! and calls `frame` once per animation frame; the loop samples the intent,
//! advances the simulation a single step, and hands back the notifications
//! for dispatch. Input is sampled, not queued: only the state of the
//! buffers at frame time matters.

use crate::settings::GameConfig;
use crate::sim::{GameEvent, GamePhase, GameState, StepInput, step};

/// Intent buffers mutated by host event handlers and sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    /// Accumulated touch drag since the last frame, in field units
    pending_delta: Option<f32>,
    /// Latest absolute paddle-center target, in field units
    pointer_target: Option<f32>,
    /// Raw x of the last touch, the reference point for the next delta
    last_touch_x: Option<f32>,
}

impl InputState {
    pub fn key_left(&mut self, held: bool) {
        self.left_held = held;
    }

    pub fn key_right(&mut self, held: bool) {
        self.right_held = held;
    }

    /// Begin a touch drag; the next move event measures from here
    pub fn touch_start(&mut self, raw_x: f32) {
        self.last_touch_x = Some(raw_x);
    }

    /// Accumulate a touch move. `scale` converts rendered-element pixels to
    /// field units (logical field width over rendered element width). A
    /// move with no prior reference point is dropped.
    pub fn touch_move(&mut self, raw_x: f32, scale: f32) {
        let Some(last) = self.last_touch_x else {
            return;
        };
        *self.pending_delta.get_or_insert(0.0) += (raw_x - last) * scale;
        self.last_touch_x = Some(raw_x);
    }

    pub fn touch_end(&mut self) {
        self.last_touch_x = None;
    }

    /// Record the latest absolute pointer target (mouse), in field units
    pub fn pointer_move(&mut self, field_x: f32) {
        self.pointer_target = Some(field_x);
    }

    /// Sample the intent for one frame. Held keys persist across frames;
    /// pointer and touch intent is consumed.
    fn sample(&mut self) -> StepInput {
        StepInput {
            left: self.left_held,
            right: self.right_held,
            paddle_delta: self.pending_delta.take(),
            paddle_target: self.pointer_target.take(),
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Drives one `GameState` at the host's frame cadence
pub struct GameLoop {
    state: GameState,
    input: InputState,
    scheduling: bool,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            input: InputState::default(),
            scheduling: false,
        }
    }

    /// Reset the simulation from the config and begin accepting frames
    pub fn start(&mut self, config: &GameConfig) {
        self.state.reset(config);
        self.input.clear();
        self.scheduling = true;
    }

    /// One animation frame: sample the intent, advance one step, and return
    /// the drained notifications. The host renders `state()` afterward and
    /// reschedules while `should_schedule()` holds; scheduling continues
    /// through the Paused hold and ends at GameOver.
    pub fn frame(&mut self) -> Vec<GameEvent> {
        if !self.scheduling {
            return Vec::new();
        }
        let intent = self.input.sample();
        step(&mut self.state, &intent);
        if self.state.phase == GamePhase::GameOver {
            self.scheduling = false;
        }
        self.state.take_events()
    }

    /// Snapshot for the renderer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Leave the life-lost hold. Returns false (and does nothing) outside
    /// the Paused phase.
    pub fn resume_after_life_loss(&mut self) -> bool {
        self.state.resume_after_life_loss()
    }

    /// Host-driven termination. Scheduling stops, so the notifications are
    /// drained and returned here instead of waiting for a frame that will
    /// never run.
    pub fn end_game(&mut self) -> Vec<GameEvent> {
        self.state.end_game();
        if self.state.phase == GamePhase::GameOver {
            self.scheduling = false;
        }
        self.state.take_events()
    }

    pub fn should_schedule(&self) -> bool {
        self.scheduling
    }

    /// Halt scheduling and drop any pending intent. Idempotent.
    pub fn stop(&mut self) {
        self.scheduling = false;
        self.input.clear();
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    #[test]
    fn test_frame_is_inert_before_start() {
        let mut game_loop = GameLoop::new();
        assert!(!game_loop.should_schedule());
        assert!(game_loop.frame().is_empty());
        assert_eq!(game_loop.state().phase, crate::sim::GamePhase::Idle);
    }

    #[test]
    fn test_start_then_frame_advances_ball() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());
        let before = game_loop.state().ball.pos;

        let events = game_loop.frame();
        // The reset sync events ride out with the first frame
        assert!(events.contains(&GameEvent::ScoreChanged { score: 0 }));
        assert_ne!(game_loop.state().ball.pos, before);
    }

    #[test]
    fn test_held_key_moves_paddle_every_frame() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());
        let start_x = game_loop.state().paddle.x;

        game_loop.input_mut().key_right(true);
        game_loop.frame();
        game_loop.frame();
        assert_eq!(game_loop.state().paddle.x, start_x + 2.0 * PADDLE_KEY_SPEED);

        game_loop.input_mut().key_right(false);
        game_loop.frame();
        assert_eq!(game_loop.state().paddle.x, start_x + 2.0 * PADDLE_KEY_SPEED);
    }

    #[test]
    fn test_touch_delta_is_scaled_and_consumed() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());
        let start_x = game_loop.state().paddle.x;

        // Element rendered at half size: 2 field units per raw pixel
        game_loop.input_mut().touch_start(100.0);
        game_loop.input_mut().touch_move(110.0, 2.0);
        game_loop.frame();
        assert_eq!(game_loop.state().paddle.x, start_x + 20.0);

        // Consumed: the next frame applies nothing
        game_loop.frame();
        assert_eq!(game_loop.state().paddle.x, start_x + 20.0);
    }

    #[test]
    fn test_touch_move_without_reference_is_dropped() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());
        let start_x = game_loop.state().paddle.x;

        game_loop.input_mut().touch_move(110.0, 2.0);
        game_loop.frame();
        assert_eq!(game_loop.state().paddle.x, start_x);

        // Same after a drag ended
        game_loop.input_mut().touch_start(100.0);
        game_loop.input_mut().touch_end();
        game_loop.input_mut().touch_move(110.0, 2.0);
        game_loop.frame();
        assert_eq!(game_loop.state().paddle.x, start_x);
    }

    #[test]
    fn test_pointer_target_centers_paddle() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());

        game_loop.input_mut().pointer_move(100.0);
        game_loop.frame();
        let width = game_loop.state().paddle.width;
        assert_eq!(game_loop.state().paddle.x, 100.0 - width / 2.0);
    }

    #[test]
    fn test_game_over_halts_scheduling() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig {
            starting_lives: 1,
            ..Default::default()
        });

        // Aim past the paddle so the next frame loses the last life
        let state = game_loop.state_mut();
        state.ball.pos = Vec2::new(30.0, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = game_loop.frame();
        assert!(events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
        assert!(!game_loop.should_schedule());
        assert!(game_loop.frame().is_empty());

        // A fresh start re-arms the loop
        game_loop.start(&GameConfig::default());
        assert!(game_loop.should_schedule());
    }

    #[test]
    fn test_scheduling_continues_through_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());

        let state = game_loop.state_mut();
        state.ball.pos = Vec2::new(30.0, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = game_loop.frame();
        assert!(events.iter().any(|e| matches!(e, GameEvent::LifeLost { .. })));
        assert!(game_loop.should_schedule());

        assert!(game_loop.resume_after_life_loss());
        assert_eq!(game_loop.state().phase, crate::sim::GamePhase::Running);
    }

    #[test]
    fn test_end_game_returns_final_events() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());
        game_loop.frame();

        let final_events = game_loop.end_game();
        assert!(!game_loop.should_schedule());
        assert!(
            final_events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );

        // Already over: a second call is a silent no-op
        assert!(game_loop.end_game().is_empty());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut game_loop = GameLoop::new();
        game_loop.start(&GameConfig::default());
        game_loop.stop();
        game_loop.stop();
        assert!(!game_loop.should_schedule());
        assert!(game_loop.frame().is_empty());
    }
}
