//! Terminal rendering for the arcade games.
//!
//! Games draw into a [`FrameBuffer`] of attributed character cells using a
//! small set of clamped primitives. A [`Screen`] owns that buffer and presents
//! it on a [`Surface`]: the crossterm-backed [`TerminalRenderer`] in the
//! binary, or [`MemorySurface`] in tests.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Never fail on out-of-range coordinates
//! - Only rewrite cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, FrameBuffer};
pub use game_view::{BreakoutView, ShooterView};
pub use renderer::{attr_to_color, encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{MemorySurface, Screen, Surface};
