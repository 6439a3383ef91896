//! Property tests for bidding (pure domain).
//!
//! Contract:
//! - Bids are accepted only in `[0, cards]`
//! - Every seat bids exactly once, starting at the first bidder
//! - The last bidder can never make total bids equal the cards dealt
//! - Editing a bid and re-submitting fills only that seat

use proptest::prelude::*;

use crate::domain::bidding::{edit_bid, forbidden_bid, legal_bids, place_bid};
use crate::domain::rules::max_cards_per_player;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::errors::domain::ValidationKind;

const NAMES: [&str; 13] = [
    "P0", "P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9", "P10", "P11", "P12",
];

/// Table size, cards in hand, first bidder and one bid seed per seat.
fn table() -> impl Strategy<Value = (u8, u8, u8, Vec<u8>)> {
    (2u8..=13).prop_flat_map(|n| {
        (
            Just(n),
            1u8..=max_cards_per_player(n),
            0u8..n,
            prop::collection::vec(any::<u8>(), n as usize),
        )
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: whatever the earlier bids, the total never equals the cards.
    #[test]
    fn prop_completed_bids_never_sum_to_cards((n, cards, first, seeds) in table()) {
        let mut state = make_game_state(
            &NAMES[..n as usize],
            MakeGameStateArgs {
                cards: Some(cards),
                first_bidder: Some(first),
                ..Default::default()
            },
        );

        for seed in seeds {
            let legal = legal_bids(&state);
            prop_assert!(!legal.is_empty());
            let choice = legal[seed as usize % legal.len()];
            place_bid(&mut state, choice).unwrap();
        }

        prop_assert!(state.bidding_complete);
        prop_assert_ne!(state.bids_total(), cards as u16);
        prop_assert!(state.bids.iter().all(|b| b.is_some_and(|v| v <= cards)));
    }

    /// Property: the forbidden value is rejected with InvalidBid and no mutation.
    #[test]
    fn prop_forbidden_bid_rejected((n, cards, first, seeds) in table()) {
        let mut state = make_game_state(
            &NAMES[..n as usize],
            MakeGameStateArgs {
                cards: Some(cards),
                first_bidder: Some(first),
                ..Default::default()
            },
        );
        for seed in seeds.iter().take(n as usize - 1) {
            place_bid(&mut state, seed % (cards + 1)).unwrap();
        }
        prop_assert!(state.is_last_bidder());

        if let Some(forbidden) = forbidden_bid(&state) {
            let before = state.clone();
            let err = place_bid(&mut state, forbidden).unwrap_err();
            prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidBid));
            prop_assert_eq!(&state, &before);
        } else {
            prop_assert!(state.bids_total() > cards as u16);
        }
    }

    /// Property: out-of-range bids are always rejected.
    #[test]
    fn prop_out_of_range_rejected(
        (n, cards, first, _seeds) in table(),
        excess in 1u8..=100,
    ) {
        let mut state = make_game_state(
            &NAMES[..n as usize],
            MakeGameStateArgs {
                cards: Some(cards),
                first_bidder: Some(first),
                ..Default::default()
            },
        );
        let err = place_bid(&mut state, cards.saturating_add(excess)).unwrap_err();
        prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidBid));
        prop_assert_eq!(state.bids_placed(), 0);
    }

    /// Property: edit then submit changes exactly the edited seat.
    #[test]
    fn prop_edit_refills_same_seat(
        (n, cards, first, seeds) in table(),
        edit_seed in any::<u8>(),
    ) {
        let mut state = make_game_state(
            &NAMES[..n as usize],
            MakeGameStateArgs {
                cards: Some(cards),
                first_bidder: Some(first),
                ..Default::default()
            },
        );
        for seed in &seeds {
            let legal = legal_bids(&state);
            place_bid(&mut state, legal[*seed as usize % legal.len()]).unwrap();
        }

        let seat = edit_seed % n;
        let others = state.bids.clone();
        edit_bid(&mut state, seat).unwrap();
        prop_assert!(!state.bidding_complete);
        prop_assert_eq!(state.current_bidder_index, seat);

        let legal = legal_bids(&state);
        let value = legal[edit_seed as usize % legal.len()];
        let filled = place_bid(&mut state, value).unwrap();
        prop_assert_eq!(filled, seat);
        prop_assert!(state.bidding_complete);
        for (i, (now, was)) in state.bids.iter().zip(&others).enumerate() {
            if i != seat as usize {
                prop_assert_eq!(now, was);
            }
        }
    }
}
