//! Validating wrapper around the trusting core game

use std::fmt;

use tenpin_core::Game;
use tenpin_types::{Pins, Score, ALL_PINS};

/// A delivery that no legal game could produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// A single roll claimed more than ten pins.
    PinsOutOfRange { pins: Pins },
    /// Two regular rolls of a non-strike frame summed past ten pins.
    FrameOverflow { first: Pins, second: Pins },
}

impl RuleError {
    pub fn code(self) -> &'static str {
        match self {
            RuleError::PinsOutOfRange { .. } => "pins_out_of_range",
            RuleError::FrameOverflow { .. } => "frame_overflow",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RuleError::PinsOutOfRange { .. } => "a delivery cannot knock down more than ten pins",
            RuleError::FrameOverflow { .. } => {
                "two rolls of a non-strike frame cannot exceed ten pins"
            }
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RuleError::PinsOutOfRange { pins } => write!(f, "{} (got {})", self.message(), pins),
            RuleError::FrameOverflow { first, second } => {
                write!(f, "{} (got {} + {})", self.message(), first, second)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// [`Game`] behind a fail-fast rule check.
///
/// Rejects deliveries outside `0..=10` and second rolls that would push a
/// non-strike frame past ten pins; everything else is handed to the core
/// unchanged. Deliveries into a finished game stay silent no-ops, matching
/// the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedGame {
    game: Game,
}

impl CheckedGame {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Record one delivery, failing before any state changes on a rule
    /// violation.
    pub fn record_roll(&mut self, pins: Pins) -> Result<(), RuleError> {
        self.check_roll(pins)?;
        self.game.record_roll(pins);
        Ok(())
    }

    fn check_roll(&self, pins: Pins) -> Result<(), RuleError> {
        if pins > ALL_PINS {
            return Err(RuleError::PinsOutOfRange { pins });
        }

        // The pair cap applies only when this delivery is the second
        // regular roll of the frame being bowled. Bonus rolls absorbed by
        // earlier strike/spare frames carry no pairwise constraint.
        if let Some(last) = self.game.frames().last() {
            if !last.is_played() && last.roll_count() == 1 {
                let first = last.rolls()[0];
                if first + pins > ALL_PINS {
                    return Err(RuleError::FrameOverflow {
                        first,
                        second: pins,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn score(&self) -> Score {
        self.game.score()
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn into_game(self) -> Game {
        self.game
    }
}
