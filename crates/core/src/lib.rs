//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the frame/game state machine and the scoring rules.
//! It has **no dependencies** on terminals, text input or I/O, making it:
//!
//! - **Deterministic**: the same roll sequence always yields the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: usable from a terminal runner, a batch tool or a GUI
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's rolls, slot bookkeeping and strike/spare classification
//! - [`game`]: the frame list and the roll state machine ([`Game::roll`])
//! - [`scoring`]: full recomputation with strike/spare lookahead
//! - [`describe`](mod@describe): scoresheet marks (`X`, `/`, `-`, digits)
//! - [`snapshot`]: serializable read-only copies for renderers and JSON output
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{describe, Game};
//!
//! let mut game = Game::new();
//! for pins in [10, 7, 3, 9, 0] {
//!     game.roll(pins).unwrap();
//! }
//!
//! assert_eq!(game.frames()[0].score(), 20);
//! assert_eq!(game.frames()[1].cumulative_score(), 39);
//! assert_eq!(game.total_score(), 48);
//! assert_eq!(describe(game.frames()[1].rolls()), "7 /");
//! ```

pub mod describe;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use describe::{describe, mark_at};
pub use frame::{Frame, FrameKind};
pub use game::Game;
pub use scoring::{recompute, ScoreTotals};
pub use snapshot::{FrameSnapshot, GameSnapshot};
