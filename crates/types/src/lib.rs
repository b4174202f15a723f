//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game rules, terminal rendering, input polling).
//!
//! # Coordinates
//!
//! Everything lives on an integer character grid. `x` grows to the right,
//! `y` grows downwards, `(0, 0)` is the top-left cell. Positions may leave the
//! grid transiently; that is how rules detect out-of-bounds entities.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Normal delay between ticks |
//! | `LOSS_PAUSE_MS` | 500 | Delay after the tick that lost a ball |
//! | `ENEMY_FIRE_PERIOD_MS` | 2000 | Per-enemy fire period |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Attr, Rect};
//!
//! let a = Rect::new(0, 0, 2, 2);
//! let b = Rect::new(2, 0, 2, 2);
//! assert_eq!(a.right(), b.left());
//!
//! let yellow = Attr::RED | Attr::GREEN;
//! assert_eq!(yellow, Attr::YELLOW);
//! ```

use std::ops::BitOr;

/// Normal delay between ticks (50ms)
pub const TICK_MS: u64 = 50;

/// Delay used for the tick that lost a ball (500ms)
pub const LOSS_PAUSE_MS: u64 = 500;

/// Period of each enemy's own fire timer (2s)
pub const ENEMY_FIRE_PERIOD_MS: u64 = 2000;

/// Terminals without key-release events treat a key as released after this long.
pub const KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a delta in place.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// True when the position lies outside `[0, width) x [0, height)`.
    pub fn is_out_of_bounds(&self, field: FieldConfig) -> bool {
        self.x < 0 || self.x >= field.width || self.y < 0 || self.y >= field.height
    }
}

/// Axis-aligned box derived from a position and an extent.
///
/// Width and height are never negative; [`Rect::new`] floors them at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn at(pos: Position, width: i32, height: i32) -> Self {
        Self::new(pos.x, pos.y, width, height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Same extent, shifted by a delta.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Colour attribute of a cell: a small bitmask of foreground colour bits.
///
/// The null attribute (`Attr::NONE`) is what cleared cells carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attr(pub u8);

impl Attr {
    pub const NONE: Attr = Attr(0x0);
    pub const BLUE: Attr = Attr(0x1);
    pub const GREEN: Attr = Attr(0x2);
    pub const RED: Attr = Attr(0x4);
    pub const INTENSITY: Attr = Attr(0x8);

    pub const WHITE: Attr = Attr(0x7);
    pub const YELLOW: Attr = Attr(0x6);
    pub const CYAN: Attr = Attr(0x3);
    pub const MAGENTA: Attr = Attr(0x5);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Attr) -> bool {
        self.0 & other.0 == other.0
    }

    /// Colour bits without the intensity flag.
    pub const fn base(self) -> Attr {
        Attr(self.0 & 0x7)
    }

    pub const fn is_intense(self) -> bool {
        self.0 & Self::INTENSITY.0 != 0
    }
}

impl BitOr for Attr {
    type Output = Attr;

    fn bitor(self, rhs: Attr) -> Attr {
        Attr(self.0 | rhs.0)
    }
}

/// Keys the games can watch.
///
/// This is the engine-facing identifier; terminal key codes are mapped onto it
/// by the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    A,
    D,
    W,
    S,
    Escape,
    Q,
}

impl Key {
    /// Number of distinct keys.
    pub const COUNT: usize = 11;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Space,
        Key::A,
        Key::D,
        Key::W,
        Key::S,
        Key::Escape,
        Key::Q,
    ];

    /// Dense index, usable for fixed-size state tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Read-only view of per-tick key state.
///
/// Game rules query keys through this trait so they stay independent of how
/// the snapshots are produced.
pub trait KeyQuery {
    /// Key is held in the current snapshot.
    fn is_key_down(&self, key: Key) -> bool;

    /// Key went from up to down between the previous and current snapshot.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Key went from down to up between the previous and current snapshot.
    fn is_key_released(&self, key: Key) -> bool;
}

/// Playfield dimensions, passed explicitly to every collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldConfig {
    pub width: i32,
    pub height: i32,
}

impl FieldConfig {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Field size of the brick-breaker (120x30).
    pub const fn breakout() -> Self {
        Self::new(120, 30)
    }

    /// Field size of the shooter (120x30).
    pub const fn shooter() -> Self {
        Self::new(120, 30)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::breakout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_follow_extent() {
        let r = Rect::new(3, 4, 10, 2);
        assert_eq!(r.left(), 3);
        assert_eq!(r.right(), 13);
        assert_eq!(r.top(), 4);
        assert_eq!(r.bottom(), 6);
    }

    #[test]
    fn rect_floors_negative_extent() {
        let r = Rect::new(0, 0, -4, -1);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }

    #[test]
    fn position_bounds_check() {
        let field = FieldConfig::new(10, 5);
        assert!(!Position::new(0, 0).is_out_of_bounds(field));
        assert!(!Position::new(9, 4).is_out_of_bounds(field));
        assert!(Position::new(10, 0).is_out_of_bounds(field));
        assert!(Position::new(0, -1).is_out_of_bounds(field));
    }

    #[test]
    fn attr_bits_compose() {
        assert_eq!(Attr::RED | Attr::BLUE, Attr::MAGENTA);
        assert_eq!(Attr::GREEN | Attr::BLUE, Attr::CYAN);
        let bright = Attr::YELLOW | Attr::INTENSITY;
        assert!(bright.is_intense());
        assert_eq!(bright.base(), Attr::YELLOW);
        assert!(bright.contains(Attr::RED));
    }

    #[test]
    fn key_indices_are_dense() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 50);
        assert_eq!(LOSS_PAUSE_MS, 500);
        assert_eq!(ENEMY_FIRE_PERIOD_MS, 2000);
    }
}
