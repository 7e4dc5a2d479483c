//! Collision checks for the rectangular playfield
//!
//! Wall and floor tests work on the ball's *next* position (current plus
//! velocity) so a reflection lands before the ball ever leaves the field;
//! the brick test works on the current position, matching the classic
//! canvas ordering.

use super::state::{Ball, Brick, Paddle};
use crate::consts::*;

/// What the ball's next vertical move means at the floor line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorOutcome {
    /// Not at the floor this frame
    Clear,
    /// Crossing the floor over the paddle: rebound
    PaddleBounce,
    /// Crossing the floor past the paddle: the ball is lost
    Lost,
}

/// Reflect off the side and top walls if the next position would leave the
/// field. The floor is handled separately by `check_floor`.
pub fn reflect_walls(ball: &mut Ball) {
    let next = ball.pos + ball.vel;
    if next.x > FIELD_WIDTH - ball.radius || next.x < ball.radius {
        ball.vel.x = -ball.vel.x;
    }
    if next.y < ball.radius {
        ball.vel.y = -ball.vel.y;
    }
}

/// Check whether the ball's next vertical position crosses the floor line,
/// and if so whether the paddle covers it. The span test uses the ball's
/// current x.
pub fn check_floor(ball: &Ball, paddle: &Paddle) -> FloorOutcome {
    if ball.pos.y + ball.vel.y <= FIELD_HEIGHT - ball.radius {
        return FloorOutcome::Clear;
    }
    if paddle.rect().spans_x(ball.pos.x) {
        FloorOutcome::PaddleBounce
    } else {
        FloorOutcome::Lost
    }
}

/// Index of the first active brick whose rect contains the ball center, in
/// column-major grid order. At most one brick is resolved per step; the
/// first hit wins.
pub fn first_brick_hit(ball: &Ball, bricks: &[Brick]) -> Option<usize> {
    bricks
        .iter()
        .position(|b| b.is_active() && b.rect.contains(ball.pos))
}
