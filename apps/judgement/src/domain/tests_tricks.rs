use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{four_player_bidding, four_player_playing};
use crate::domain::tricks::{pending_seats, record_hands_won};
use crate::errors::domain::ValidationKind;

#[test]
fn entries_accepted_in_any_order() {
    let mut state = four_player_playing(5, [1, 2, 0, 1]);
    assert_eq!(pending_seats(&state), vec![0, 1, 2, 3]);

    assert!(!record_hands_won(&mut state, 2, 1).unwrap());
    assert!(!record_hands_won(&mut state, 0, 2).unwrap());
    assert!(!record_hands_won(&mut state, 3, 0).unwrap());
    assert_eq!(pending_seats(&state), vec![1]);
    assert!(record_hands_won(&mut state, 1, 2).unwrap());
    assert!(pending_seats(&state).is_empty());
}

#[test]
fn entry_may_be_overwritten_before_last_slot() {
    let mut state = four_player_playing(5, [1, 2, 0, 1]);
    record_hands_won(&mut state, 0, 4).unwrap();
    record_hands_won(&mut state, 0, 1).unwrap();
    assert_eq!(state.hands_won[0], Some(1));
}

#[test]
fn totals_are_not_checked_against_cards() {
    let mut state = four_player_playing(3, [1, 1, 1, 1]);
    for seat in 0..4 {
        record_hands_won(&mut state, seat, 3).unwrap();
    }
    assert!(state.hands_won_ready());
}

#[test]
fn count_above_cards_rejected() {
    let mut state = four_player_playing(3, [1, 1, 1, 1]);
    let before = state.clone();
    let err = record_hands_won(&mut state, 0, 4).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidTrickCount));
    assert_eq!(state, before);
}

#[test]
fn unknown_seat_rejected() {
    let mut state = four_player_playing(3, [1, 1, 1, 1]);
    let err = record_hands_won(&mut state, 4, 0).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidSeat));
}

#[test]
fn entry_outside_playing_rejected() {
    let mut state = four_player_bidding(3);
    assert_eq!(state.phase, Phase::Bidding);
    let err = record_hands_won(&mut state, 0, 1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}
