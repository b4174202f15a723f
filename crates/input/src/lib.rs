//! Keyboard input for the arcade engine.
//!
//! [`InputPoller`] turns a level-triggered [`KeySource`] into per-tick edges
//! (pressed/released). [`TerminalKeys`] reconstructs held-state from crossterm
//! events, including terminals that never send key-release events.
//! [`ScriptedKeys`] is a hand-driven source for tests and headless runs.

pub mod map;
pub mod poller;
pub mod source;
pub mod terminal;

pub use tui_arcade_types as types;

pub use map::{is_quit_key, key_from_event};
pub use poller::InputPoller;
pub use source::{KeySource, ScriptedKeys};
pub use terminal::TerminalKeys;
