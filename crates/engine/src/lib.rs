//! Game loop driving a [`Playable`] game against a [`Screen`] and a key source.
//!
//! The loop is single-threaded and paces itself with `std::thread::sleep`; a
//! tick that lost a life asks for the longer pause.

pub mod config;
pub mod game_loop;
pub mod playable;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use config::LoopConfig;
pub use game_loop::{GameLoop, LoopExit, LoopStats};
pub use playable::{BreakoutGame, Playable, ShooterGame};
