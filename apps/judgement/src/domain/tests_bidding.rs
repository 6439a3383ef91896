use crate::domain::bidding::{edit_bid, forbidden_bid, legal_bids, place_bid};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{four_player_bidding, make_game_state, MakeGameStateArgs};
use crate::errors::domain::{DomainError, ValidationKind};

/// Four players where seat 0 bids first and seat 3 bids last.
fn table_bidding_from_seat_zero(cards: u8) -> crate::domain::state::GameState {
    make_game_state(
        &["A", "B", "C", "D"],
        MakeGameStateArgs {
            cards: Some(cards),
            dealer: Some(3),
            first_bidder: Some(0),
            ..Default::default()
        },
    )
}

#[test]
fn bids_follow_seat_order_from_first_bidder() {
    let mut state = four_player_bidding(5);
    assert_eq!(state.current_bidder_index, 1);

    assert_eq!(place_bid(&mut state, 1).unwrap(), 1);
    assert_eq!(state.current_bidder_index, 2);
    assert_eq!(place_bid(&mut state, 0).unwrap(), 2);
    assert_eq!(state.current_bidder_index, 3);
    assert_eq!(place_bid(&mut state, 2).unwrap(), 3);
    assert_eq!(state.current_bidder_index, 0);
    assert!(!state.bidding_complete);

    // sum so far 3, forbidden for seat 0 is 2
    assert_eq!(place_bid(&mut state, 3).unwrap(), 0);
    assert!(state.bidding_complete);
    assert_eq!(state.bids, vec![Some(3), Some(1), Some(0), Some(2)]);
    assert_eq!(state.phase, Phase::Bidding);
}

#[test]
fn last_bidder_rejected_when_total_would_equal_cards() {
    let mut state = table_bidding_from_seat_zero(13);
    place_bid(&mut state, 3).unwrap();
    place_bid(&mut state, 2).unwrap();
    place_bid(&mut state, 1).unwrap();

    assert!(state.is_last_bidder());
    assert_eq!(forbidden_bid(&state), Some(7));

    let before = state.clone();
    let err = place_bid(&mut state, 7).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::InvalidBid, msg) => {
            assert!(
                msg.contains("Last bidder cannot bid 7"),
                "unexpected error message: {msg}"
            );
        }
        other => panic!("expected InvalidBid validation error, got: {other:?}"),
    }
    assert_eq!(state, before, "rejected bid must not mutate state");

    place_bid(&mut state, 6).unwrap();
    assert_eq!(state.bids, vec![Some(3), Some(2), Some(1), Some(6)]);
    assert!(state.bidding_complete);
}

#[test]
fn no_forbidden_value_when_earlier_bids_exceed_cards() {
    let mut state = table_bidding_from_seat_zero(3);
    place_bid(&mut state, 3).unwrap();
    place_bid(&mut state, 3).unwrap();
    place_bid(&mut state, 0).unwrap();

    assert_eq!(forbidden_bid(&state), None);
    assert_eq!(legal_bids(&state), vec![0, 1, 2, 3]);
    place_bid(&mut state, 0).unwrap();
    assert!(state.bidding_complete);
}

#[test]
fn out_of_range_bid_rejected() {
    let mut state = four_player_bidding(5);
    let err = place_bid(&mut state, 6).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidBid));
    assert!(state.bids.iter().all(Option::is_none));
    assert_eq!(state.current_bidder_index, 1);
}

#[test]
fn bid_outside_bidding_phase_rejected() {
    let mut state = four_player_bidding(5);
    state.phase = Phase::TrumpSelection;
    let err = place_bid(&mut state, 1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn bid_after_completion_rejected() {
    let mut state = four_player_bidding(2);
    for v in [0, 0, 0, 0] {
        place_bid(&mut state, v).unwrap();
    }
    assert!(state.bidding_complete);
    let err = place_bid(&mut state, 1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn edit_reopens_exactly_one_slot() {
    let mut state = table_bidding_from_seat_zero(13);
    for v in [3, 2, 1, 6] {
        place_bid(&mut state, v).unwrap();
    }
    assert!(state.bidding_complete);

    edit_bid(&mut state, 1).unwrap();
    assert!(!state.bidding_complete);
    assert_eq!(state.current_bidder_index, 1);
    assert_eq!(state.bids, vec![Some(3), None, Some(1), Some(6)]);

    // seat 1 is now the last open slot: 13 - 10 = 3 is forbidden
    assert_eq!(forbidden_bid(&state), Some(3));
    assert!(place_bid(&mut state, 3).is_err());
    assert_eq!(place_bid(&mut state, 4).unwrap(), 1);
    assert!(state.bidding_complete);
    assert_eq!(state.bids, vec![Some(3), Some(4), Some(1), Some(6)]);
}

#[test]
fn edit_mid_bidding_resumes_with_open_seats() {
    let mut state = table_bidding_from_seat_zero(5);
    place_bid(&mut state, 1).unwrap();
    place_bid(&mut state, 2).unwrap();
    edit_bid(&mut state, 0).unwrap();

    // slots 0, 2 and 3 open: no forbidden value yet
    assert_eq!(forbidden_bid(&state), None);
    assert_eq!(place_bid(&mut state, 0).unwrap(), 0);
    // advance skips the already-filled seat 1
    assert_eq!(state.current_bidder_index, 2);
}

#[test]
fn edit_unset_seat_rejected() {
    let mut state = four_player_bidding(5);
    let err = edit_bid(&mut state, 2).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidSeat));

    let err = edit_bid(&mut state, 9).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidSeat));
}

#[test]
fn two_player_game_has_forbidden_value_for_second_bidder() {
    let mut state = make_game_state(&["A", "B"], MakeGameStateArgs::default());
    assert_eq!(state.cards_this_round, 26);
    assert_eq!(state.current_bidder_index, 1);

    place_bid(&mut state, 20).unwrap();
    assert_eq!(state.current_bidder_index, 0);
    assert_eq!(forbidden_bid(&state), Some(6));
    assert!(place_bid(&mut state, 6).is_err());
    place_bid(&mut state, 5).unwrap();
    assert!(state.bidding_complete);
}
