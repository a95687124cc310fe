//! Game module - frame bookkeeping and score aggregation
//!
//! The game owns the ten frames and routes every delivery. Strike and
//! spare bonuses fall out of a single rule: every frame that has not
//! reached its roll limit absorbs every subsequent delivery. After a
//! double strike one incoming roll lands in three frames at once, which is
//! exactly the "count the next two balls" credit without lookahead or
//! pending-bonus pointers.

use arrayvec::ArrayVec;

use crate::frame::Frame;
use crate::scorecard::Scorecard;
use tenpin_types::{Pins, Score, FRAME_COUNT};

/// A single ten-frame game.
///
/// The frame sequence is insertion-ordered (play order) and never exceeds
/// ten entries. Frames are created by [`Game::record_roll`] and live for
/// the rest of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, FRAME_COUNT>,
}

impl Game {
    /// Create a game with no frames; the first roll opens frame one.
    pub fn new() -> Self {
        Self {
            frames: ArrayVec::new(),
        }
    }

    /// Record one delivery.
    ///
    /// Opens a new frame when the previous one has been fully bowled (and
    /// fewer than ten exist), then lets every frame that is still short of
    /// its roll limit absorb the pin count. Once all ten frames are
    /// complete this is a no-op.
    ///
    /// Must be called sequentially, in actual play order. No validation is
    /// performed on `pins`.
    pub fn record_roll(&mut self, pins: Pins) {
        if self.needs_new_frame() {
            self.frames.push(Frame::new());
        }
        for frame in self.frames.iter_mut().filter(|f| !f.is_complete()) {
            frame.add_roll(pins);
        }
    }

    fn needs_new_frame(&self) -> bool {
        match self.frames.last() {
            None => true,
            Some(last) => last.is_played() && self.frames.len() < FRAME_COUNT,
        }
    }

    /// Read-only ordered view of the frames opened so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Current total: the sum of every frame's score. Valid mid-game.
    pub fn score(&self) -> Score {
        self.frames.iter().map(Frame::score).sum()
    }

    /// All ten frames exist and the last one is complete. Derived, not
    /// stored; further deliveries no longer change anything.
    pub fn is_over(&self) -> bool {
        self.frames.len() == FRAME_COUNT && self.frames[FRAME_COUNT - 1].is_complete()
    }

    /// Build the presentation scorecard for the current state.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_game(self)
    }
}
