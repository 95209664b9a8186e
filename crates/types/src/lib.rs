//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the scoring engine.
//! Everything here is plain data, usable from core logic, the session layer and
//! the terminal renderer alike.
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `ROLLS_PER_FRAME` | 2 | Roll cap for frames 1-9 |
//! | `FINAL_FRAME_ROLLS` | 3 | Roll cap for frame 10 (bonus ball) |
//!
//! # Display Marks
//!
//! Rolls are displayed with the traditional scoresheet marks:
//!
//! - `X`: strike
//! - `/`: spare
//! - `-`: miss (zero pins)
//! - `1`-`9`: pin count
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{Mark, RollError, RollErrorKind, FRAME_COUNT, PIN_COUNT};
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//!
//! assert_eq!(Mark::Strike.as_str(), "X");
//! assert_eq!(Mark::Pins(7).to_string(), "7");
//!
//! let err = RollError::IllegalRoll { pins: 8, remaining: 5 };
//! assert_eq!(err.kind(), RollErrorKind::IllegalRoll);
//! ```

use std::fmt;

/// Number of frames in a game
pub const FRAME_COUNT: u8 = 10;

/// Pins standing in a full rack
pub const PIN_COUNT: u8 = 10;

/// Maximum rolls in frames 1-9
pub const ROLLS_PER_FRAME: u8 = 2;

/// Maximum rolls in the final frame (two rolls plus the bonus ball)
pub const FINAL_FRAME_ROLLS: u8 = 3;

/// Roll sequence replayed by demo seeding.
///
/// Scores 167 with cumulative frame scores
/// `[20, 39, 48, 66, 74, 84, 90, 120, 148, 167]`.
pub const DEMO_ROLLS: [u8; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

/// Rejection of an attempted roll or roll token.
///
/// None of these are fatal: the game is left untouched and the caller decides
/// how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// A textual token could not be turned into a legal pin count.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// More pins than are standing in the active frame's slot.
    #[error("Number of pins knocked over ({pins}) exceeds pins remaining ({remaining})")]
    IllegalRoll { pins: u8, remaining: u8 },

    /// All ten frames are complete.
    #[error("Game is over")]
    GameOver,
}

/// Fieldless discriminant of [`RollError`], for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollErrorKind {
    InvalidInput,
    IllegalRoll,
    GameOver,
}

impl RollError {
    pub fn kind(&self) -> RollErrorKind {
        match self {
            RollError::InvalidInput(_) => RollErrorKind::InvalidInput,
            RollError::IllegalRoll { .. } => RollErrorKind::IllegalRoll,
            RollError::GameOver => RollErrorKind::GameOver,
        }
    }

    /// Shorthand for an [`RollError::InvalidInput`] carrying the offending token.
    pub fn invalid(token: impl Into<String>) -> Self {
        RollError::InvalidInput(token.into())
    }
}

impl RollErrorKind {
    /// Convert to a stable snake_case name (used in logs and JSON output)
    pub fn as_str(&self) -> &'static str {
        match self {
            RollErrorKind::InvalidInput => "invalid_input",
            RollErrorKind::IllegalRoll => "illegal_roll",
            RollErrorKind::GameOver => "game_over",
        }
    }
}

/// A single scoresheet mark for one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// All ten pins on the first ball of a rack
    Strike,
    /// The rest of the rack on the second ball
    Spare,
    /// Zero pins
    Miss,
    /// Any other pin count
    Pins(u8),
}

impl Mark {
    /// Convert to the scoresheet token.
    ///
    /// Pin counts above ten have no static token and map to `"?"`; use the
    /// `Display` impl to render arbitrary counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::Mark;
    ///
    /// assert_eq!(Mark::Strike.as_str(), "X");
    /// assert_eq!(Mark::Spare.as_str(), "/");
    /// assert_eq!(Mark::Miss.as_str(), "-");
    /// assert_eq!(Mark::Pins(4).as_str(), "4");
    /// ```
    pub fn as_str(&self) -> &'static str {
        const DIGITS: [&str; 11] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

        match self {
            Mark::Strike => "X",
            Mark::Spare => "/",
            Mark::Miss => "-",
            Mark::Pins(n) => DIGITS.get(*n as usize).copied().unwrap_or("?"),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Pins(n) => write!(f, "{n}"),
            other => f.write_str(other.as_str()),
        }
    }
}
