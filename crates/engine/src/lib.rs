//! Scoring session engine.
//!
//! [`Scorekeeper`] is the synchronous API a presentation layer uses: start a
//! game, roll pins or typed tokens, read frames and totals back. Rejections
//! come back as [`RollError`](crate::types::RollError) values and are logged
//! through `tracing`; the game is never left half-updated.
//!
//! ```
//! use tui_bowling_engine::Scorekeeper;
//!
//! let mut keeper = Scorekeeper::new();
//! keeper.roll_entry("x, 7, /, 9, -").unwrap();
//!
//! assert_eq!(keeper.game().total_score(), 48);
//! assert_eq!(Scorekeeper::describe(keeper.game().frames()[1].rolls()), "7 /");
//! ```

pub mod config;
pub mod scorekeeper;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_types as types;

pub use config::SessionConfig;
pub use scorekeeper::{EntryError, Scorekeeper};
