//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of both games and the collision engine they
//! share. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the shooter's randomness comes from a seeded RNG
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: views and loops live in other crates
//!
//! # Module Structure
//!
//! - [`collision`]: AABB overlap, wall reflection, paddle bounce, first-hit scan
//! - [`entities`]: paddle, ball and brick
//! - [`layout`]: brick grid and ring layouts
//! - [`sprite`]: glyph masks, sprites and the plain-text asset loader
//! - [`starfield`]: shooter background
//! - [`breakout`]: brick-breaker rules and state machine
//! - [`shooter`]: side-scrolling shooter rules and state machine
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{Breakout, BreakoutPhase};
//! use tui_arcade_core::types::{Key, KeyQuery};
//!
//! struct NoKeys;
//! impl KeyQuery for NoKeys {
//!     fn is_key_down(&self, _: Key) -> bool { false }
//!     fn is_key_pressed(&self, _: Key) -> bool { false }
//!     fn is_key_released(&self, _: Key) -> bool { false }
//! }
//!
//! let mut game = Breakout::default();
//! let report = game.tick(&NoKeys);
//! assert_eq!(report.phase, BreakoutPhase::Playing);
//! assert_eq!(game.lives(), 3);
//! ```

pub mod breakout;
pub mod collision;
pub mod entities;
pub mod layout;
pub mod shooter;
pub mod sprite;
pub mod starfield;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use breakout::{Breakout, BreakoutConfig, BreakoutPhase, BreakoutTick};
pub use collision::{intersects, Direction};
pub use entities::{Ball, Brick, Paddle};
pub use layout::BrickLayout;
pub use shooter::{Shooter, ShooterConfig, ShooterPhase, ShooterSprites, ShooterTick};
pub use sprite::{GlyphMask, Sprite};
pub use starfield::{Star, Starfield};

/// How long the loop should wait after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// The normal short delay.
    Normal,
    /// The longer pause shown after a life is lost.
    LossPause,
}
