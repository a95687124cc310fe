//! Frame module - per-frame roll storage and classification
//!
//! A frame owns the raw rolls assigned to it, bonus rolls included.
//! Classification and score are derived from the rolls on demand; nothing
//! is cached. Rolls are append-only, never reordered or removed.

use arrayvec::ArrayVec;

use tenpin_types::{FrameKind, Pins, Score, ALL_PINS, BONUS_FRAME_ROLLS, OPEN_FRAME_ROLLS};

/// One of the ten scoring units of a game.
///
/// Holds at most three rolls: the frame's regular deliveries plus, for
/// strike and spare frames, the absorbed bonus rolls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rolls: ArrayVec<Pins, BONUS_FRAME_ROLLS>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self {
            rolls: ArrayVec::new(),
        }
    }

    /// Append a roll. The pin count is taken as-is; callers are trusted to
    /// supply legal values.
    pub fn add_roll(&mut self, pins: Pins) {
        self.rolls.push(pins);
    }

    /// First roll knocked down all ten pins.
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&ALL_PINS)
    }

    /// First two rolls together knocked down all ten pins, without a strike.
    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.rolls.len() >= 2 && self.rolls[0] + self.rolls[1] == ALL_PINS
    }

    /// Derived classification of this frame.
    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Sum of every roll currently held, bonus rolls included.
    pub fn score(&self) -> Score {
        self.rolls.iter().sum()
    }

    /// Number of rolls recorded so far.
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Read-only view of the recorded rolls.
    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    /// The bowler has delivered every regular ball for this frame: a
    /// strike, a spare, or two open rolls. The next delivery belongs to a
    /// new frame (if one may still be opened).
    pub fn is_played(&self) -> bool {
        self.is_strike() || self.is_spare() || self.rolls.len() >= OPEN_FRAME_ROLLS
    }

    /// The frame's score is settled and it absorbs no further rolls: three
    /// for strike and spare frames (bonus included), two otherwise.
    pub fn is_complete(&self) -> bool {
        self.rolls.len() >= self.roll_limit()
    }

    /// How many rolls this frame absorbs before it stops accepting more.
    fn roll_limit(&self) -> usize {
        if self.is_strike() || self.is_spare() {
            BONUS_FRAME_ROLLS
        } else {
            OPEN_FRAME_ROLLS
        }
    }
}
