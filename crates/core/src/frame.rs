//! Frame module - one frame's rolls and the fields derived from them
//!
//! A frame owns its roll list and the per-slot bookkeeping (`rolls_remaining`,
//! `pins_remaining`, `is_active`). The scoring fields are written only by
//! [`crate::scoring::recompute`].

use arrayvec::ArrayVec;

use crate::types::{RollError, FINAL_FRAME_ROLLS, FRAME_COUNT, PIN_COUNT, ROLLS_PER_FRAME};

/// Roll storage for a single frame (three slots covers the bonus ball).
pub type Rolls = ArrayVec<u8, { FINAL_FRAME_ROLLS as usize }>;

/// Classification of frames 1-9 for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Ten pins on the first roll
    Strike,
    /// Ten pins across exactly two rolls
    Spare,
    /// Anything else, including a frame still in progress
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    frame_number: u8,
    rolls: Rolls,
    rolls_remaining: u8,
    pins_remaining: u8,
    is_active: bool,
    pub(crate) score: u32,
    pub(crate) cumulative_score: u32,
    pub(crate) completed_scoring: bool,
}

impl Frame {
    /// Create an empty frame with a full rack.
    pub fn new(frame_number: u8) -> Self {
        let rolls_remaining = if frame_number == FRAME_COUNT {
            FINAL_FRAME_ROLLS
        } else {
            ROLLS_PER_FRAME
        };

        Self {
            frame_number,
            rolls: Rolls::new(),
            rolls_remaining,
            pins_remaining: PIN_COUNT,
            is_active: true,
            score: 0,
            cumulative_score: 0,
            completed_scoring: false,
        }
    }

    pub fn frame_number(&self) -> u8 {
        self.frame_number
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn rolls_remaining(&self) -> u8 {
        self.rolls_remaining
    }

    pub fn pins_remaining(&self) -> u8 {
        self.pins_remaining
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// This frame's own contribution to the total.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Running total through this frame, inclusive.
    pub fn cumulative_score(&self) -> u32 {
        self.cumulative_score
    }

    /// True once `score` can no longer change.
    pub fn completed_scoring(&self) -> bool {
        self.completed_scoring
    }

    /// Whether this is the tenth frame.
    pub fn is_final(&self) -> bool {
        self.frame_number == FRAME_COUNT
    }

    /// Sum of the pins knocked down in this frame.
    pub fn pinfall(&self) -> u32 {
        self.rolls.iter().map(|&p| u32::from(p)).sum()
    }

    /// Strike/spare/open classification (meaningful for frames 1-9).
    pub fn kind(&self) -> FrameKind {
        match self.rolls.as_slice() {
            [first] if *first == PIN_COUNT => FrameKind::Strike,
            [first, second] if u16::from(*first) + u16::from(*second) == u16::from(PIN_COUNT) => {
                FrameKind::Spare
            }
            _ => FrameKind::Open,
        }
    }

    /// Check that `pins` can be knocked down from what is standing.
    pub fn check(&self, pins: u8) -> Result<(), RollError> {
        check_standing(pins, self.pins_remaining)
    }

    /// Record an already validated roll and advance the slot bookkeeping.
    ///
    /// Closes the frame when its last roll has been used: after a strike or
    /// two rolls in frames 1-9, after an open second roll or the bonus ball
    /// in frame 10. Frame 10 racks fresh pins after a strike or a spare.
    pub(crate) fn record(&mut self, pins: u8) {
        debug_assert!(self.is_active, "roll recorded on a closed frame");

        if self.rolls.try_push(pins).is_err() {
            return;
        }
        self.rolls_remaining = self.rolls_remaining.saturating_sub(1);
        self.pins_remaining = self.pins_remaining.saturating_sub(pins);

        if !self.is_final() {
            if pins == PIN_COUNT || self.rolls.len() == ROLLS_PER_FRAME as usize {
                self.close();
            }
            return;
        }

        match *self.rolls.as_slice() {
            [first] => {
                if first == PIN_COUNT {
                    self.pins_remaining = PIN_COUNT;
                }
            }
            [first, second] => {
                let both = u16::from(first) + u16::from(second);
                let double = first == PIN_COUNT && second == PIN_COUNT;

                if double || both == u16::from(PIN_COUNT) {
                    self.pins_remaining = PIN_COUNT;
                } else if both < u16::from(PIN_COUNT) {
                    self.close();
                }
            }
            _ => self.close(),
        }
    }

    fn close(&mut self) {
        self.is_active = false;
        self.rolls_remaining = 0;
    }
}

/// Validate a pin count against the pins standing in a slot.
pub(crate) fn check_standing(pins: u8, remaining: u8) -> Result<(), RollError> {
    if pins > remaining {
        return Err(RollError::IllegalRoll { pins, remaining });
    }
    Ok(())
}
