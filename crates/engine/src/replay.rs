//! Whole-sequence replay helpers

use std::fmt;

use crate::checked::{CheckedGame, RuleError};
use tenpin_core::Game;
use tenpin_types::Pins;

/// Drive a fresh unchecked [`Game`] through an ordered roll sequence.
///
/// Replaying the same sequence always produces the same game.
pub fn replay<I>(rolls: I) -> Game
where
    I: IntoIterator<Item = Pins>,
{
    let mut game = Game::new();
    for pins in rolls {
        game.record_roll(pins);
    }
    game
}

/// A rule violation found while replaying a roll sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayError {
    /// Zero-based position of the offending delivery.
    pub index: usize,
    pub violation: RuleError,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delivery {}: {}", self.index, self.violation)
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

/// Drive a fresh [`CheckedGame`] through an ordered roll sequence, failing
/// on the first illegal delivery.
pub fn replay_checked<I>(rolls: I) -> Result<Game, ReplayError>
where
    I: IntoIterator<Item = Pins>,
{
    let mut game = CheckedGame::new();
    for (index, pins) in rolls.into_iter().enumerate() {
        game.record_roll(pins)
            .map_err(|violation| ReplayError { index, violation })?;
    }
    Ok(game.into_game())
}
