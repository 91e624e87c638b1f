use glam::Vec2;

use crate::components::{Ball, Paddle, Side};

/// Axis-aligned bounding box (inclusive on every edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Region the ball's top-left corner must be in for a paddle hit.
///
/// Horizontally the ball width is used as the tolerance on the paddle's
/// right edge and the paddle width on its left edge, for both sides. The
/// odd offsets are what the game has always played with, so keep them.
pub fn paddle_hit_zone(paddle: &Paddle, ball: &Ball) -> Aabb {
    Aabb::new(
        Vec2::new(paddle.pos.x - paddle.size.x, paddle.pos.y - ball.size.y),
        Vec2::new(paddle.pos.x + ball.size.x, paddle.pos.y + paddle.size.y),
    )
}

/// X the ball is snapped to after bouncing off a paddle
pub fn paddle_bounce_x(paddle: &Paddle, ball: &Ball) -> f32 {
    match paddle.side {
        Side::User => paddle.pos.x + ball.size.x,
        Side::Opponent => paddle.pos.x - ball.size.x,
    }
}
