//! Brick-breaker entities: paddle, ball and bricks.

use crate::collision::Direction;
use crate::types::{Position, Rect};

/// Player-controlled paddle with a boolean occupancy mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pos: Position,
    width: i32,
    height: i32,
    shape: Vec<bool>,
}

impl Paddle {
    /// A solid paddle: every cell of the mask is occupied.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            pos: Position::default(),
            width,
            height,
            shape: vec![true; (width * height) as usize],
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.pos = Position::new(x, y);
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn shape(&self) -> &[bool] {
        &self.shape
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.width, self.height)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.pos.translate(dx, dy);
    }
}

/// Single-cell ball moving one cell per tick along its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: Position,
    pub dir: Direction,
}

impl Ball {
    pub const GLYPH: char = 'O';
    pub const LOST_GLYPH: char = 'X';

    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, 1, 1)
    }

    /// Where the ball will be after the next step.
    pub fn next_rect(&self) -> Rect {
        self.rect().offset(self.dir.dx, self.dir.dy)
    }

    pub fn advance(&mut self) {
        self.pos.translate(self.dir.dx, self.dir.dy);
    }
}

/// Static brick. Once destroyed it stays destroyed until the layout is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    pos: Position,
    width: i32,
    height: i32,
    destroyed: bool,
}

impl Brick {
    pub const GLYPH: char = '.';

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: Position::new(x, y),
            width: width.max(0),
            height: height.max(0),
            destroyed: false,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, self.width, self.height)
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
