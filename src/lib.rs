//! TUI Arcade (workspace facade crate).
//!
//! Re-exports the member crates under one `tui_arcade::{core,engine,input,term,types}`
//! namespace; the implementation lives in dedicated crates under `crates/`.

pub use tui_arcade_core as core;
pub use tui_arcade_engine as engine;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
