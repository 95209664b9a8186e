//! Game state module - the frame list and the roll state machine
//!
//! [`Game::roll`] is the only mutating entry point during play. It validates a
//! pin count against the frame it would land in, records it, opens the next
//! frame as soon as one closes, then rebuilds every score from scratch.
//!
//! A rejected roll leaves the game untouched, with one exception: rolling
//! after the tenth frame is done re-asserts `is_over`.

use arrayvec::ArrayVec;

use crate::frame::{check_standing, Frame};
use crate::scoring::{self, ScoreTotals};
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{RollError, FRAME_COUNT, PIN_COUNT};

const MAX_FRAMES: usize = FRAME_COUNT as usize;

/// One game of ten frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, MAX_FRAMES>,
    total_score: u32,
    completed_frames_score: u32,
    is_over: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a whole roll sequence on a fresh game, stopping at the first rejection.
    pub fn from_rolls(rolls: &[u8]) -> Result<Self, RollError> {
        let mut game = Self::new();
        for &pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently opened frame, or `None` before the first roll.
    ///
    /// Once the game is over this stays on frame 10.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn completed_frames_score(&self) -> u32 {
        self.completed_frames_score
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Knock down `pins` in the current frame.
    pub fn roll(&mut self, pins: u8) -> Result<(), RollError> {
        let standing = self
            .frames
            .last()
            .filter(|f| f.is_active())
            .map(Frame::pins_remaining);

        let index = match standing {
            Some(remaining) => {
                check_standing(pins, remaining)?;
                self.frames.len() - 1
            }
            None => {
                if self.frames.is_full() {
                    self.is_over = true;
                    return Err(RollError::GameOver);
                }
                // Validate against the fresh rack before opening the frame.
                check_standing(pins, PIN_COUNT)?;
                self.create_next_frame();
                self.frames.len() - 1
            }
        };

        let frame = &mut self.frames[index];
        frame.record(pins);
        if !frame.is_active() {
            self.create_next_frame();
        }

        self.recompute();

        if let Some(current) = self.frames.last() {
            if current.is_final() && current.rolls_remaining() == 0 {
                self.is_over = true;
            }
        }

        Ok(())
    }

    /// Open the next frame. Returns `false` once all ten frames exist.
    pub fn create_next_frame(&mut self) -> bool {
        if self.frames.is_full() {
            return false;
        }

        let number = self.frames.len() as u8 + 1;
        self.frames.push(Frame::new(number));
        true
    }

    /// Rebuild all scores from the roll lists. Returns the total score.
    pub fn recompute(&mut self) -> u32 {
        let ScoreTotals {
            total_score,
            completed_frames_score,
        } = scoring::recompute(&mut self.frames);

        self.total_score = total_score;
        self.completed_frames_score = completed_frames_score;
        total_score
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.frames.clear();
        out.frames
            .extend(self.frames.iter().map(FrameSnapshot::from));
        out.current_frame = self.current_frame().map(Frame::frame_number);
        out.total_score = self.total_score;
        out.completed_frames_score = self.completed_frames_score;
        out.is_over = self.is_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RollErrorKind;

    fn cumulative(game: &Game) -> Vec<u32> {
        game.frames().iter().map(Frame::cumulative_score).collect()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert!(game.frames().is_empty());
        assert!(game.current_frame().is_none());
        assert_eq!(game.total_score(), 0);
        assert!(!game.is_over());
    }

    #[test]
    fn test_first_roll_opens_frame() {
        let mut game = Game::new();
        game.roll(5).unwrap();

        assert_eq!(game.frames().len(), 1);
        assert_eq!(game.current_frame().unwrap().frame_number(), 1);
    }

    #[test]
    fn test_closed_frame_opens_next() {
        let mut game = Game::new();
        game.roll(5).unwrap();
        game.roll(3).unwrap();
        assert_eq!(game.frames().len(), 2);
        assert!(game.current_frame().unwrap().is_active());

        game.roll(1).unwrap();
        assert_eq!(game.frames().len(), 2);
    }

    #[test]
    fn test_create_next_frame_caps_at_ten() {
        let mut game = Game::new();
        for _ in 0..9 {
            assert!(game.create_next_frame());
        }
        assert!(game.create_next_frame());
        assert!(!game.create_next_frame());
        assert_eq!(game.frames().len(), 10);
    }

    #[test]
    fn test_illegal_first_roll_leaves_no_frame() {
        let mut game = Game::new();
        let err = game.roll(11).unwrap_err();

        assert_eq!(err.kind(), RollErrorKind::IllegalRoll);
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_illegal_second_roll() {
        let mut game = Game::new();
        game.roll(5).unwrap();
        let before = game.clone();

        assert_eq!(
            game.roll(8),
            Err(RollError::IllegalRoll { pins: 8, remaining: 5 })
        );
        assert_eq!(game, before);
        assert!(game.roll(5).is_ok());
    }

    #[test]
    fn test_game_over_after_tenth_frame() {
        let mut game = Game::from_rolls(&[0; 20]).unwrap();
        assert!(game.is_over());
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.frames().len(), 10);

        assert_eq!(game.roll(0), Err(RollError::GameOver));
        assert!(game.is_over());
        assert_eq!(game.frames().len(), 10);
    }

    #[test]
    fn test_perfect_game() {
        let game = Game::from_rolls(&[10; 12]).unwrap();
        assert_eq!(game.total_score(), 300);
        assert_eq!(game.completed_frames_score(), 300);
        assert!(game.frames().iter().all(Frame::completed_scoring));
        assert!(game.is_over());
    }

    #[test]
    fn test_demo_game() {
        let game = Game::from_rolls(&crate::types::DEMO_ROLLS).unwrap();
        assert_eq!(game.total_score(), 167);
        assert_eq!(
            cumulative(&game),
            vec![20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
        );
    }

    #[test]
    fn test_spare_completion() {
        let game = Game::from_rolls(&[8, 2]).unwrap();
        assert!(!game.frames()[0].completed_scoring());
        assert_eq!(game.frames()[0].cumulative_score(), 10);
        assert_eq!(game.completed_frames_score(), 0);

        let game = Game::from_rolls(&[8, 2, 3]).unwrap();
        assert!(game.frames()[0].completed_scoring());
        assert_eq!(game.frames()[0].score(), 13);
        assert_eq!(game.completed_frames_score(), 13);
    }

    #[test]
    fn test_tenth_frame_open_ends_game() {
        let mut rolls = vec![0; 18];
        rolls.extend([1, 2]);
        let game = Game::from_rolls(&rolls).unwrap();

        assert!(game.is_over());
        assert_eq!(game.total_score(), 3);
    }

    #[test]
    fn test_tenth_frame_spare_waits_for_bonus_ball() {
        let mut rolls = vec![0; 18];
        rolls.extend([1, 9]);
        let mut game = Game::from_rolls(&rolls).unwrap();

        assert!(!game.is_over());
        game.roll(10).unwrap();
        assert!(game.is_over());
        assert_eq!(game.total_score(), 20);
    }

    #[test]
    fn test_snapshot() {
        let game = Game::from_rolls(&[10, 5]).unwrap();
        let snap = game.snapshot();

        assert_eq!(snap.frames.len(), 2);
        assert_eq!(snap.current_frame, Some(2));
        assert_eq!(snap.frames[0].marks, "X");
        assert_eq!(snap.frames[1].rolls, vec![5]);
        assert_eq!(snap.total_score, 20);
        assert!(!snap.is_over);
    }
}
