//! Scorecard module - read-only presentation rows built from a game
//!
//! Pure data for harnesses and renderers; built on demand, never stored by
//! the game itself.

use arrayvec::ArrayVec;

use crate::game::Game;
use tenpin_types::{FrameKind, Pins, Score, BONUS_FRAME_ROLLS, FRAME_COUNT};

/// One row of the scorecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub kind: FrameKind,
    pub rolls: ArrayVec<Pins, BONUS_FRAME_ROLLS>,
    /// This frame's own score, bonus rolls included.
    pub score: Score,
    /// Cumulative score through this frame.
    pub running_total: Score,
    /// Whether the frame has absorbed every roll it is owed.
    pub complete: bool,
}

/// Point-in-time view of a whole game, one row per opened frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    pub rows: ArrayVec<FrameRow, FRAME_COUNT>,
    pub total: Score,
}

impl Scorecard {
    pub fn from_game(game: &Game) -> Self {
        let mut rows = ArrayVec::new();
        let mut running_total = 0;

        for frame in game.frames() {
            running_total += frame.score();
            rows.push(FrameRow {
                kind: frame.kind(),
                rolls: frame.rolls().iter().copied().collect(),
                score: frame.score(),
                running_total,
                complete: frame.is_complete(),
            });
        }

        Self {
            rows,
            total: running_total,
        }
    }
}
