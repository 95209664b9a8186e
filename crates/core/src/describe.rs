//! Roll descriptions - scoresheet marks for a frame's roll list
//!
//! This is display logic, not validation: any roll list, however implausible,
//! maps to a deterministic string.

use std::fmt::Write;

use crate::types::{Mark, PIN_COUNT};

/// Mark for roll `index` of `rolls`, or `None` if out of range.
///
/// Three-roll lists are read as a tenth frame:
/// - roll 2 is `X` only when it follows a strike, otherwise `/` when it
///   completes a spare with roll 1;
/// - roll 3 is `X` on ten pins, and `/` only when roll 1 was a strike and
///   rolls 2 and 3 make ten. A spare in rolls 1-2 followed by roll 3 shows a digit.
pub fn mark_at(rolls: &[u8], index: usize) -> Option<Mark> {
    let roll = *rolls.get(index)?;

    if roll == 0 {
        return Some(Mark::Miss);
    }

    let Some(previous) = index.checked_sub(1).and_then(|i| rolls.get(i).copied()) else {
        return Some(if roll == PIN_COUNT {
            Mark::Strike
        } else {
            Mark::Pins(roll)
        });
    };

    let spare = makes_rack(previous, roll);
    let mark = if rolls.len() == 3 {
        match index {
            1 if previous == PIN_COUNT => {
                if roll == PIN_COUNT {
                    Mark::Strike
                } else {
                    Mark::Pins(roll)
                }
            }
            1 if spare => Mark::Spare,
            2 if roll == PIN_COUNT => Mark::Strike,
            2 if rolls[0] == PIN_COUNT && previous != PIN_COUNT && spare => Mark::Spare,
            _ => Mark::Pins(roll),
        }
    } else if spare {
        Mark::Spare
    } else {
        Mark::Pins(roll)
    };

    Some(mark)
}

/// Space-separated marks for a frame's rolls (`""` for no rolls).
///
/// # Examples
///
/// ```
/// use tui_bowling_core::describe;
///
/// assert_eq!(describe(&[10, 5, 5]), "X 5 /");
/// assert_eq!(describe(&[0, 10]), "- /");
/// assert_eq!(describe(&[]), "");
/// ```
pub fn describe(rolls: &[u8]) -> String {
    let mut out = String::with_capacity(rolls.len() * 2);

    for index in 0..rolls.len() {
        let Some(mark) = mark_at(rolls, index) else {
            break;
        };
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{mark}");
    }

    out
}

fn makes_rack(a: u8, b: u8) -> bool {
    u16::from(a) + u16::from(b) == u16::from(PIN_COUNT)
}
