//! Pure scoring core - deterministic, allocation-free, I/O-free
//!
//! This crate scores ten-pin bowling without lookahead: every frame that
//! still owes rolls absorbs each subsequent delivery until it reaches its
//! roll limit (two for open frames, three for strikes and spares). A bonus
//! roll is therefore the same physical delivery appended to more than one
//! frame, which reproduces the "next one or two balls" credit without any
//! pending-bonus bookkeeping.
//!
//! # Module Structure
//!
//! - [`frame`]: roll holder for one frame with strike/spare classification
//! - [`game`]: frame-open policy, roll distribution, score aggregation
//! - [`scorecard`]: read-only per-frame presentation rows
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! for pins in [10, 4, 4] {
//!     game.record_roll(pins);
//! }
//!
//! // The strike frame absorbed both following rolls as its bonus.
//! assert_eq!(game.frames()[0].score(), 18);
//! assert_eq!(game.score(), 26);
//! ```

pub mod frame;
pub mod game;
pub mod scorecard;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use frame::Frame;
pub use game::Game;
pub use scorecard::{FrameRow, Scorecard};
