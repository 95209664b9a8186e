//! Scorekeeper - the procedural API presentation code talks to.
//!
//! Owns the one [`Game`] in play and routes rolls into it, whether they arrive
//! as pin counts, single tokens, or comma-separated entries.

use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::core::{describe, Game, GameSnapshot};
use crate::input::{normalize, split_entry};
use crate::types::{RollError, DEMO_ROLLS};

/// A rejected token inside a multi-roll entry.
///
/// Tokens before it were rolled and stay rolled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{source} (token {position}: {token:?})")]
pub struct EntryError {
    /// Tokens rolled before the rejection.
    pub applied: usize,
    /// 1-based position of the rejected token.
    pub position: usize,
    pub token: String,
    pub source: RollError,
}

#[derive(Debug, Clone, Default)]
pub struct Scorekeeper {
    game: Game,
}

impl Scorekeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session, seeding the demo game when configured.
    pub fn from_config(config: &SessionConfig) -> Result<Self, RollError> {
        let mut keeper = Self::new();
        if config.demo {
            keeper.seed_demo()?;
        }
        Ok(keeper)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Discard the current game and start a fresh one.
    pub fn start_new_game(&mut self) {
        let previous = self.game.total_score();
        self.game = Game::new();
        info!(previous_total = previous, "new game");
    }

    /// Roll `pins`. On rejection nothing about the game changes.
    pub fn roll(&mut self, pins: u8) -> Result<(), RollError> {
        let was_over = self.game.is_over();

        match self.game.roll(pins) {
            Ok(()) => {
                let frame = self.game.current_frame().map_or(0, |f| f.frame_number());
                debug!(pins, frame, total = self.game.total_score(), "roll");
                if self.game.is_over() && !was_over {
                    info!(total = self.game.total_score(), "game over");
                }
                Ok(())
            }
            Err(err) => {
                warn!(pins, kind = err.kind().as_str(), %err, "roll rejected");
                Err(err)
            }
        }
    }

    /// Resolve a token against the current frame's rolls.
    pub fn normalize(&self, token: &str) -> Result<u8, RollError> {
        let prior = self.game.current_frame().map_or(&[][..], |f| f.rolls());
        normalize(token, prior)
    }

    /// Normalize and roll a single token. Returns the pins rolled.
    pub fn roll_token(&mut self, token: &str) -> Result<u8, RollError> {
        let pins = self.normalize(token).inspect_err(|err| {
            warn!(token, kind = err.kind().as_str(), %err, "token rejected");
        })?;
        self.roll(pins)?;
        Ok(pins)
    }

    /// Roll every token of a comma-separated entry, in order.
    ///
    /// Stops at the first rejected token. Returns how many tokens were rolled.
    pub fn roll_entry(&mut self, text: &str) -> Result<usize, EntryError> {
        let mut applied = 0;

        for (i, token) in split_entry(text).enumerate() {
            if let Err(source) = self.roll_token(token) {
                return Err(EntryError {
                    applied,
                    position: i + 1,
                    token: token.to_string(),
                    source,
                });
            }
            applied += 1;
        }

        Ok(applied)
    }

    /// Replay the demo roll sequence on a fresh game.
    pub fn seed_demo(&mut self) -> Result<(), RollError> {
        self.start_new_game();
        for &pins in DEMO_ROLLS.iter() {
            self.roll(pins)?;
        }
        info!(rolls = DEMO_ROLLS.len(), total = self.game.total_score(), "demo seeded");
        Ok(())
    }

    /// Scoresheet marks for a frame's rolls.
    pub fn describe(rolls: &[u8]) -> String {
        describe(rolls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RollErrorKind;

    #[test]
    fn test_roll_entry_applies_all_tokens() {
        let mut keeper = Scorekeeper::new();
        assert_eq!(keeper.roll_entry("x, 7, /, 9, -"), Ok(5));

        let game = keeper.game();
        assert_eq!(game.frames()[0].score(), 20);
        assert_eq!(game.frames()[1].rolls(), &[7, 3]);
        assert_eq!(game.total_score(), 48);
    }

    #[test]
    fn test_roll_entry_stops_at_rejection() {
        let mut keeper = Scorekeeper::new();
        let err = keeper.roll_entry("5, 8, 2").unwrap_err();

        assert_eq!(err.applied, 1);
        assert_eq!(err.position, 2);
        assert_eq!(err.token, "8");
        assert_eq!(err.source.kind(), RollErrorKind::IllegalRoll);
        assert_eq!(keeper.game().frames()[0].rolls(), &[5]);
    }

    #[test]
    fn test_blank_entry_rolls_nothing() {
        let mut keeper = Scorekeeper::new();
        assert_eq!(keeper.roll_entry("  "), Ok(0));
        assert!(keeper.game().frames().is_empty());
    }

    #[test]
    fn test_spare_token_uses_current_frame() {
        let mut keeper = Scorekeeper::new();
        assert_eq!(keeper.roll_token("6"), Ok(6));
        assert_eq!(keeper.roll_token("/"), Ok(4));

        // Next frame is already open and empty.
        assert_eq!(
            keeper.roll_token("/").map_err(|e| e.kind()),
            Err(RollErrorKind::InvalidInput)
        );
    }

    #[test]
    fn test_seed_demo() {
        let mut keeper = Scorekeeper::new();
        keeper.roll(3).unwrap();
        keeper.seed_demo().unwrap();

        assert_eq!(keeper.game().total_score(), 167);
        assert!(keeper.game().is_over());
    }

    #[test]
    fn test_from_config() {
        let keeper = Scorekeeper::from_config(&SessionConfig::default()).unwrap();
        assert!(keeper.game().frames().is_empty());

        let config = SessionConfig {
            demo: true,
            ..SessionConfig::default()
        };
        let keeper = Scorekeeper::from_config(&config).unwrap();
        assert_eq!(keeper.game().total_score(), 167);
    }

    #[test]
    fn test_start_new_game() {
        let mut keeper = Scorekeeper::new();
        keeper.roll_entry("x,x,x").unwrap();
        keeper.start_new_game();

        assert!(keeper.game().frames().is_empty());
        assert_eq!(keeper.game().total_score(), 0);
        assert!(!keeper.game().is_over());
    }

    #[test]
    fn test_game_over_rejects_roll() {
        let mut keeper = Scorekeeper::new();
        keeper.roll_entry(&["0"; 20].join(",")).unwrap();

        assert_eq!(keeper.roll(0), Err(RollError::GameOver));
        assert_eq!(keeper.snapshot().total_score, 0);
    }
}
