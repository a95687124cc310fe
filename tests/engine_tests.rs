//! Checked-play and replay tests

use tenpin::engine::{replay, replay_checked, CheckedGame, RuleError};

#[test]
fn test_checked_game_rejects_eleven_pins() {
    let mut game = CheckedGame::new();
    assert_eq!(
        game.record_roll(11),
        Err(RuleError::PinsOutOfRange { pins: 11 })
    );
    assert_eq!(game.score(), 0);
}

#[test]
fn test_checked_game_rejects_overfilled_frame() {
    let mut game = CheckedGame::new();
    game.record_roll(7).unwrap();
    assert_eq!(
        game.record_roll(4),
        Err(RuleError::FrameOverflow {
            first: 7,
            second: 4
        })
    );

    // The failed delivery left no trace; play continues.
    game.record_roll(3).unwrap();
    assert_eq!(game.score(), 10);
    assert!(game.game().frames()[0].is_spare());
}

#[test]
fn test_checked_game_accepts_a_strike_pair() {
    let mut game = CheckedGame::new();
    game.record_roll(10).unwrap();
    // Next delivery opens a new frame; 10 + 9 across frames is fine.
    game.record_roll(9).unwrap();
    assert_eq!(game.game().frames().len(), 2);
}

#[test]
fn test_checked_game_rejects_overflow_after_a_strike_frame() {
    let mut game = CheckedGame::new();
    game.record_roll(10).unwrap();
    game.record_roll(9).unwrap();

    // 9 + 2 would overflow frame two even though frame one still absorbs
    // the same delivery as a bonus.
    assert_eq!(
        game.record_roll(2),
        Err(RuleError::FrameOverflow {
            first: 9,
            second: 2
        })
    );
}

#[test]
fn test_replay_checked_reference_sequence() {
    let game = replay_checked([1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]).unwrap();
    assert_eq!(game.score(), 133);
}

#[test]
fn test_replay_checked_flags_the_bad_delivery() {
    let err = replay_checked([4, 4, 4, 12]).unwrap_err();
    assert_eq!(err.index, 3);
    assert_eq!(err.violation.code(), "pins_out_of_range");
    assert!(err.to_string().contains("delivery 3"));
}

#[test]
fn test_replay_and_checked_replay_agree_on_legal_games() {
    let rolls = [10, 0, 10, 5, 5, 7, 2, 10, 10, 10, 0, 8, 1, 9, 10, 10, 6];
    let unchecked = replay(rolls);
    let checked = replay_checked(rolls).unwrap();

    assert_eq!(unchecked.score(), checked.score());
    assert_eq!(unchecked.frames(), checked.frames());
}
