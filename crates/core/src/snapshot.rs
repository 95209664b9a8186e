use serde::Serialize;

use crate::describe::describe;
use crate::frame::Frame;

/// Read-only copy of one frame, with its scoresheet marks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FrameSnapshot {
    pub frame_number: u8,
    pub rolls: Vec<u8>,
    pub rolls_remaining: u8,
    pub pins_remaining: u8,
    pub is_active: bool,
    pub score: u32,
    pub cumulative_score: u32,
    pub completed_scoring: bool,
    pub marks: String,
}

impl From<&Frame> for FrameSnapshot {
    fn from(frame: &Frame) -> Self {
        Self {
            frame_number: frame.frame_number(),
            rolls: frame.rolls().to_vec(),
            rolls_remaining: frame.rolls_remaining(),
            pins_remaining: frame.pins_remaining(),
            is_active: frame.is_active(),
            score: frame.score(),
            cumulative_score: frame.cumulative_score(),
            completed_scoring: frame.completed_scoring(),
            marks: describe(frame.rolls()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub frames: Vec<FrameSnapshot>,
    /// Number of the current frame, if any.
    pub current_frame: Option<u8>,
    pub total_score: u32,
    pub completed_frames_score: u32,
    pub is_over: bool,
}

impl GameSnapshot {
    pub fn frame(&self, frame_number: u8) -> Option<&FrameSnapshot> {
        self.frames
            .iter()
            .find(|f| f.frame_number == frame_number)
    }

    /// Cumulative score as a scoresheet shows it: only once the frame is final.
    pub fn settled_score(&self, frame_number: u8) -> Option<u32> {
        self.frame(frame_number)
            .filter(|f| f.completed_scoring)
            .map(|f| f.cumulative_score)
    }
}
