//! Roll input module (engine-facing).
//!
//! Turns what a person types into pin counts. [`normalize`] and
//! [`split_entry`] are pure and UI-independent; [`map`] and [`line`] map
//! `crossterm` key events onto a small entry line for the terminal runner.

pub mod line;
pub mod map;
pub mod token;

pub use tui_bowling_types as types;

pub use line::{LineBuffer, MAX_ENTRY_LEN};
pub use map::{handle_key_event, should_quit, EditAction};
pub use token::{normalize, split_entry};
