//! Property-based tests for the scoring engine.

use proptest::prelude::*;

use tenpin::core::Game;
use tenpin::engine::replay;
use tenpin::types::{FRAME_COUNT, PERFECT_SCORE};

/// Strategy: an arbitrary sequence of deliveries, each 0-10 pins.
///
/// Frame totals may be illegal (the core trusts its caller), which is
/// exactly the input domain these properties must hold over.
fn rolls_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..=10u32, 0..32)
}

proptest! {
    // 1. Replaying a sequence is deterministic
    #[test]
    fn replay_is_deterministic(rolls in rolls_strategy()) {
        let a = replay(rolls.iter().copied());
        let b = replay(rolls.iter().copied());
        prop_assert_eq!(a.score(), b.score());
        prop_assert_eq!(a.frames(), b.frames());
    }

    // 2. The frame sequence never exceeds ten entries
    #[test]
    fn never_more_than_ten_frames(rolls in rolls_strategy()) {
        let game = replay(rolls.iter().copied());
        prop_assert!(game.frames().len() <= FRAME_COUNT);
    }

    // 3. The total is always the sum of the per-frame scores
    #[test]
    fn total_is_sum_of_frame_scores(rolls in rolls_strategy()) {
        let game = replay(rolls.iter().copied());
        let sum: u32 = game.frames().iter().map(|f| f.score()).sum();
        prop_assert_eq!(game.score(), sum);
    }

    // 4. Recording a roll never lowers the running total
    #[test]
    fn score_never_decreases(rolls in rolls_strategy()) {
        let mut game = Game::new();
        let mut last = 0;
        for pins in rolls {
            game.record_roll(pins);
            let now = game.score();
            prop_assert!(now >= last, "score fell from {} to {}", last, now);
            last = now;
        }
    }

    // 5. With every delivery at most ten pins, no game beats a perfect one
    #[test]
    fn score_capped_at_perfect(rolls in rolls_strategy()) {
        let game = replay(rolls.iter().copied());
        prop_assert!(game.score() <= PERFECT_SCORE);
    }

    // 6. No frame ever holds more than three rolls, and only marked frames hold three
    #[test]
    fn frames_respect_roll_limits(rolls in rolls_strategy()) {
        let game = replay(rolls.iter().copied());
        for frame in game.frames() {
            prop_assert!(frame.roll_count() <= 3);
            if frame.roll_count() == 3 {
                prop_assert!(frame.is_strike() || frame.is_spare());
            }
        }
    }

    // 7. Zero rolls open a frame every two deliveries, up to ten
    #[test]
    fn zero_rolls_open_a_frame_every_two(n in 0..30usize) {
        let game = replay(std::iter::repeat(0).take(n));
        prop_assert_eq!(game.frames().len(), usize::min(n.div_ceil(2), FRAME_COUNT));
        prop_assert_eq!(game.score(), 0);
    }

    // 8. A finished game ignores any further delivery
    #[test]
    fn finished_games_ignore_extra_rolls(extra in 0..=10u32) {
        let mut game = replay([4; 20]);
        prop_assert!(game.is_over());

        let settled = game.score();
        game.record_roll(extra);
        prop_assert_eq!(game.score(), settled);
        prop_assert_eq!(game.frames().len(), FRAME_COUNT);
    }
}
