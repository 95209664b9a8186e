//! Scoring module - ten-pin scoring with strike and spare lookahead
//!
//! Scores are always rebuilt from the roll lists: [`recompute`] walks every
//! frame in order and overwrites its `score`, `cumulative_score` and
//! `completed_scoring`. No state survives between calls, so it is safe (and
//! idempotent) to run after every roll.
//!
//! Rules:
//! - Frame 10 scores its own pinfall, bonus balls included.
//! - Strike: 10 plus the next two rolls, walking across frame boundaries.
//! - Spare: 10 plus the next roll.
//! - Open: the frame's pinfall.
//!
//! Rolls that have not been thrown yet contribute nothing, so a strike or
//! spare score is provisional until its bonus rolls exist.

use arrayvec::ArrayVec;

use crate::frame::{Frame, FrameKind};
use crate::types::PIN_COUNT;

/// Game-level totals produced by [`recompute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTotals {
    /// Sum of every frame's score, provisional ones included.
    pub total_score: u32,
    /// Cumulative score of the last frame whose score is final (0 if none).
    pub completed_frames_score: u32,
}

/// Rolls thrown after frame `index`, up to the two a strike needs.
///
/// Takes the next frame's first roll, then its second roll if thrown,
/// otherwise the first roll of the frame after it (strike followed by strike).
pub fn bonus_rolls(frames: &[Frame], index: usize) -> ArrayVec<u8, 2> {
    let mut rolls = ArrayVec::new();

    let Some(next) = frames.get(index + 1) else {
        return rolls;
    };

    if let Some(&first) = next.rolls().first() {
        rolls.push(first);
    }

    match next.rolls().get(1) {
        Some(&second) => rolls.push(second),
        None => {
            if let Some(&after) = frames.get(index + 2).and_then(|f| f.rolls().first()) {
                rolls.push(after);
            }
        }
    }

    rolls
}

/// Score of frame `index` given everything thrown so far.
pub fn frame_score(frames: &[Frame], index: usize) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };

    if frame.is_final() {
        return frame.pinfall();
    }

    let rack = u32::from(PIN_COUNT);
    match frame.kind() {
        FrameKind::Strike => rack + sum(&bonus_rolls(frames, index)),
        FrameKind::Spare => {
            rack + bonus_rolls(frames, index)
                .first()
                .map_or(0, |&p| u32::from(p))
        }
        FrameKind::Open => frame.pinfall(),
    }
}

/// Whether every roll frame `index`'s score depends on has been thrown.
pub fn is_scoring_complete(frames: &[Frame], index: usize) -> bool {
    let Some(frame) = frames.get(index) else {
        return false;
    };

    if frame.is_final() {
        return match frame.rolls().len() {
            3 => true,
            2 => frame.pinfall() < u32::from(PIN_COUNT),
            _ => false,
        };
    }

    match frame.kind() {
        FrameKind::Strike => bonus_rolls(frames, index).len() >= 2,
        FrameKind::Spare => !bonus_rolls(frames, index).is_empty(),
        FrameKind::Open => !frame.is_active(),
    }
}

/// Rebuild every frame's score fields and return the game totals.
pub fn recompute(frames: &mut [Frame]) -> ScoreTotals {
    let mut running: u32 = 0;

    for index in 0..frames.len() {
        let score = frame_score(frames, index);
        let complete = is_scoring_complete(frames, index);
        running = running.saturating_add(score);

        let frame = &mut frames[index];
        frame.score = score;
        frame.cumulative_score = running;
        frame.completed_scoring = complete;
    }

    let completed_frames_score = frames
        .iter()
        .rev()
        .find(|f| f.completed_scoring)
        .map_or(0, |f| f.cumulative_score);

    ScoreTotals {
        total_score: running,
        completed_frames_score,
    }
}

fn sum(rolls: &[u8]) -> u32 {
    rolls.iter().map(|&p| u32::from(p)).sum()
}
