//! Roll tokens - free text to pin counts.
//!
//! Accepted tokens (case-insensitive, surrounding whitespace ignored):
//!
//! | Token | Pins |
//! |-------|------|
//! | `x`, `strike` | 10 |
//! | `/`, `spare` | 10 minus the previous roll in the frame |
//! | `-`, `miss`, empty | 0 |
//! | `0`..`10` | that many |

use crate::types::{RollError, PIN_COUNT};

/// Convert one token into a pin count.
///
/// `prior_rolls` are the rolls already in the current frame; only `/` reads them.
///
/// # Examples
///
/// ```
/// use tui_bowling_input::normalize;
///
/// assert_eq!(normalize("X", &[]), Ok(10));
/// assert_eq!(normalize("/", &[7]), Ok(3));
/// assert_eq!(normalize("miss", &[]), Ok(0));
/// assert_eq!(normalize("8", &[]), Ok(8));
/// assert!(normalize("/", &[]).is_err());
/// assert!(normalize("11", &[]).is_err());
/// ```
pub fn normalize(token: &str, prior_rolls: &[u8]) -> Result<u8, RollError> {
    let token = token.trim();

    match token.to_ascii_lowercase().as_str() {
        "x" | "strike" => Ok(PIN_COUNT),
        "/" | "spare" => prior_rolls
            .last()
            .map(|&last| PIN_COUNT.saturating_sub(last))
            .ok_or_else(|| RollError::invalid("cannot roll a spare on the first roll")),
        "" | "-" | "miss" => Ok(0),
        _ => parse_pins(token),
    }
}

/// Plain base-10 digits only: no sign, no decimal point.
fn parse_pins(token: &str) -> Result<u8, RollError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RollError::invalid(token));
    }

    match token.parse::<u32>() {
        Ok(pins) if pins <= u32::from(PIN_COUNT) => Ok(pins as u8),
        _ => Err(RollError::invalid(token)),
    }
}

/// Split a free-text entry into roll tokens.
///
/// Tokens are comma-separated and trimmed. A blank entry yields no tokens; an
/// empty token between commas is kept (and reads as a miss).
pub fn split_entry(text: &str) -> impl Iterator<Item = &str> {
    let blank = text.trim().is_empty();
    text.split(',')
        .filter(move |_| !blank)
        .map(str::trim)
}
