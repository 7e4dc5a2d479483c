//! Game state and core simulation types
//!
//! One `GameState` value is the single source of truth for one in-progress
//! (or not-yet-started) game. It is owned by the controller and mutated only
//! through `reset`, `step`, `resume_after_life_loss`, and `end_game`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start; the field is laid out but nothing moves
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// A life was lost; the simulation holds until the host acknowledges
    Paused,
    /// Run ended
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position: horizontal center, just above the paddle,
    /// moving up-and-right at the launch velocity.
    pub fn spawned() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - BALL_SPAWN_HEIGHT),
            vel: Vec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle, fixed to the floor line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge in field units
    pub x: f32,
    pub width: f32,
}

impl Paddle {
    /// Paddle centered in the field at the given width
    pub fn centered(width: f32) -> Self {
        Self {
            x: (FIELD_WIDTH - width) / 2.0,
            width,
        }
    }

    /// Move by `dx`, clamped to the field
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, FIELD_WIDTH - self.width);
    }

    /// Center the paddle on an absolute field x, clamped to the field
    pub fn move_center_to(&mut self, center_x: f32) {
        self.x = (center_x - self.width / 2.0).clamp(0.0, FIELD_WIDTH - self.width);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x,
            FIELD_HEIGHT - PADDLE_HEIGHT,
            self.width,
            PADDLE_HEIGHT,
        )
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::centered(PADDLE_DEFAULT_WIDTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Active,
    Destroyed,
}

/// One brick in the grid. Position never changes; only the status does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub col: usize,
    pub row: usize,
    pub rect: Rect,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }
}

/// Build the fixed brick grid in column-major order (column outer, row
/// inner). Collision resolution walks the slice in this order.
pub fn brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_COLS * BRICK_ROWS);
    for col in 0..BRICK_COLS {
        for row in 0..BRICK_ROWS {
            let x = BRICK_OFFSET_LEFT + col as f32 * (BRICK_WIDTH + BRICK_PADDING);
            let y = BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
            bricks.push(Brick {
                col,
                row,
                rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                status: BrickStatus::Active,
            });
        }
    }
    bricks
}

/// One-way notifications surfaced to the host. Queued during the mutating
/// operations and drained once per frame; no acknowledgment is expected
/// except `resume_after_life_loss` to leave the Paused phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { score: u64 },
    LevelChanged { level: u32 },
    LivesChanged { lives: u8 },
    /// A life was lost but the run continues; the host decides when to
    /// respawn via `resume_after_life_loss`
    LifeLost { lives_remaining: u8 },
    /// Terminal notification with the final tallies
    GameOver { score: u64, level: u32, lives: u8 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major grid; index = col * BRICK_ROWS + row
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub level: u32,
    pub lives: u8,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Idle-phase state with the grid laid out, so a snapshot is always
    /// drawable before the first start.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            ball: Ball::spawned(),
            paddle: Paddle::default(),
            bricks: brick_grid(),
            score: 0,
            level: 1,
            lives: DEFAULT_LIVES,
            events: Vec::new(),
        }
    }

    /// Start a fresh run from the given configuration. Valid in any phase.
    /// Out-of-range config values clamp silently.
    pub fn reset(&mut self, config: &GameConfig) {
        self.phase = GamePhase::Running;
        self.ball = Ball::spawned();
        self.paddle = Paddle::centered(
            config.paddle_width.clamp(PADDLE_MIN_WIDTH, PADDLE_MAX_WIDTH),
        );
        self.bricks = brick_grid();
        self.score = 0;
        self.level = 1;
        self.lives = config.starting_lives.max(1);
        self.events.clear();
        // Sync events so host bindings start from a consistent HUD
        self.push_event(GameEvent::ScoreChanged { score: 0 });
        self.push_event(GameEvent::LevelChanged { level: 1 });
        self.push_event(GameEvent::LivesChanged { lives: self.lives });
        log::info!(
            "game started: paddle width {}, {} lives",
            self.paddle.width,
            self.lives
        );
    }

    /// Respawn the ball after a life loss. Valid only while Paused; any
    /// other phase is a no-op that returns false.
    pub fn resume_after_life_loss(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            log::debug!("resume_after_life_loss ignored in phase {:?}", self.phase);
            return false;
        }
        self.ball = Ball::spawned();
        self.phase = GamePhase::Running;
        log::info!("resumed with {} lives", self.lives);
        true
    }

    /// Host-driven termination of the current run, e.g. giving up from the
    /// life-lost hold. No-op unless a run is in progress.
    pub fn end_game(&mut self) {
        match self.phase {
            GamePhase::Running | GamePhase::Paused => {
                self.phase = GamePhase::GameOver;
                self.push_event(GameEvent::GameOver {
                    score: self.score,
                    level: self.level,
                    lives: self.lives,
                });
                log::info!("game ended by host at score {}", self.score);
            }
            _ => log::debug!("end_game ignored in phase {:?}", self.phase),
        }
    }

    /// Number of bricks still standing
    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    /// Reactivate the whole grid (level-up)
    pub fn reset_bricks(&mut self) {
        for brick in &mut self.bricks {
            brick.status = BrickStatus::Active;
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the notifications queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_column_major() {
        let bricks = brick_grid();
        assert_eq!(bricks.len(), BRICK_COLS * BRICK_ROWS);
        // First column fills before the second starts
        assert_eq!((bricks[0].col, bricks[0].row), (0, 0));
        assert_eq!((bricks[1].col, bricks[1].row), (0, 1));
        assert_eq!((bricks[BRICK_ROWS].col, bricks[BRICK_ROWS].row), (1, 0));
    }

    #[test]
    fn test_grid_layout_positions() {
        let bricks = brick_grid();
        let first = &bricks[0];
        assert_eq!(first.rect.x, BRICK_OFFSET_LEFT);
        assert_eq!(first.rect.y, BRICK_OFFSET_TOP);
        // Second column, second row
        let b = bricks.iter().find(|b| b.col == 1 && b.row == 1).unwrap();
        assert_eq!(b.rect.x, BRICK_OFFSET_LEFT + BRICK_WIDTH + BRICK_PADDING);
        assert_eq!(b.rect.y, BRICK_OFFSET_TOP + BRICK_HEIGHT + BRICK_PADDING);
    }

    #[test]
    fn test_reset_starts_running() {
        let mut state = GameState::new();
        assert_eq!(state.phase, GamePhase::Idle);

        let config = GameConfig::default();
        state.reset(&config);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, config.starting_lives);
        assert_eq!(state.active_bricks(), BRICK_COLS * BRICK_ROWS);
        assert_eq!(state.ball.vel, glam::Vec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY));

        let events = state.take_events();
        assert!(events.contains(&GameEvent::ScoreChanged { score: 0 }));
        assert!(events.contains(&GameEvent::LivesChanged { lives: 3 }));
    }

    #[test]
    fn test_resume_is_noop_outside_paused() {
        let mut state = GameState::new();
        assert!(!state.resume_after_life_loss());
        assert_eq!(state.phase, GamePhase::Idle);

        state.reset(&GameConfig::default());
        assert!(!state.resume_after_life_loss());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_end_game_from_run_only() {
        let mut state = GameState::new();
        state.end_game();
        assert_eq!(state.phase, GamePhase::Idle);

        state.reset(&GameConfig::default());
        state.take_events();
        state.end_game();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::GameOver {
                score: 0,
                level: 1,
                lives: 3
            }]
        );

        // Already over: nothing further
        state.end_game();
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_paddle_clamping() {
        let mut paddle = Paddle::centered(75.0);
        paddle.shift(-1000.0);
        assert_eq!(paddle.x, 0.0);
        paddle.shift(1000.0);
        assert_eq!(paddle.x, FIELD_WIDTH - 75.0);
        paddle.move_center_to(0.0);
        assert_eq!(paddle.x, 0.0);
        paddle.move_center_to(FIELD_WIDTH);
        assert_eq!(paddle.x, FIELD_WIDTH - 75.0);
        paddle.move_center_to(240.0);
        assert_eq!(paddle.x, 240.0 - 37.5);
    }
}
