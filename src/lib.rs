//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the member crates as `tui_bowling::{core,engine,input,term,types}`
//! and holds the small amount of glue the binaries share.

pub mod logging;

pub use tui_bowling_core as core;
pub use tui_bowling_engine as engine;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;
