//! Terminal scorecard module.
//!
//! A small rendering layer for the interactive runner. The scorecard is drawn
//! into a plain framebuffer by a pure view, then flushed to the terminal by a
//! crossterm renderer.
//!
//! Goals:
//! - Keep `core` free of any display concerns
//! - Make the scoresheet layout unit-testable without a terminal
//! - Reuse the same view for plain-text output

pub mod fb;
pub mod renderer;
pub mod scorecard;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_into, TerminalRenderer};
pub use scorecard::{
    Prompt, ScorecardView, Status, Viewport, GRID_HEIGHT, GRID_WIDTH, VIEW_HEIGHT,
};
