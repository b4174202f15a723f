//! Collision engine - AABB overlap and bounce rules
//!
//! Everything here is a pure function over [`Rect`]s and directions. The
//! game rules decide *when* to call these; this module only decides *what*
//! the outcome of a contact is.

use crate::types::{FieldConfig, Rect};

/// Unit direction of a moving entity. Components are -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn flip_x(&mut self) {
        self.dx = -self.dx;
    }

    pub fn flip_y(&mut self) {
        self.dy = -self.dy;
    }
}

/// Strict half-open overlap test. Rects that only share an edge do not collide.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// A horizontal edge coordinate sits on or past a side wall.
pub fn x_out(bound: i32, field: FieldConfig) -> bool {
    bound >= field.width || bound <= 0
}

/// A vertical edge coordinate sits on or past the ceiling or the floor.
pub fn y_out(bound: i32, field: FieldConfig) -> bool {
    bound >= field.height || bound <= 0
}

/// Flip direction components whose leading edges crossed the field boundary.
///
/// Position is left untouched: an entity may render one tick outside and
/// reverse on the next one.
pub fn reflect_walls(rect: Rect, dir: &mut Direction, field: FieldConfig) {
    if x_out(rect.left(), field) || x_out(rect.right(), field) {
        dir.flip_x();
    }
    if y_out(rect.top(), field) {
        dir.flip_y();
    }
}

/// Horizontal direction after a paddle hit: the sign of
/// `ball.x - paddle_center`, with 0 meaning straight up.
pub fn paddle_bounce_dx(ball: Rect, paddle: Rect) -> i32 {
    let paddle_center = paddle.x + paddle.width / 2;
    (ball.x - paddle_center).signum()
}

/// Apply a paddle contact: reassign `dx` (resetting speed to unit magnitude)
/// and flip `dy`.
pub fn bounce_off_paddle(ball: Rect, paddle: Rect, dir: &mut Direction) {
    dir.flip_y();
    dir.dx = paddle_bounce_dx(ball, paddle);
}

/// Index of the first target in iteration order that overlaps `probe`.
///
/// When several targets overlap in the same tick, the earliest one wins.
/// `None` targets (destroyed entities) keep their slot but never match.
pub fn first_hit<I, R>(probe: Rect, targets: I) -> Option<usize>
where
    I: IntoIterator<Item = R>,
    R: Into<Option<Rect>>,
{
    targets
        .into_iter()
        .position(|r| r.into().is_some_and(|r| intersects(probe, r)))
}
