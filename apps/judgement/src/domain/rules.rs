use std::ops::RangeInclusive;

use crate::domain::state::Seat;

pub const DECK_SIZE: u8 = 52;
pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 13;
pub const EXACT_BID_BONUS: u16 = 10;

/// Cards each player receives in the opening round.
pub fn max_cards_per_player(players: u8) -> u8 {
    if players == 0 {
        return 0;
    }
    DECK_SIZE / players
}

/// One round per card count, from `max_cards_per_player` down to 1.
pub fn total_rounds(players: u8) -> u8 {
    max_cards_per_player(players)
}

// Card schedule: next = max - (round mod max). For every round before the last
// this is simply max - round, so the count only ever goes down.
/// Cards dealt in the round after `round_no`, or `None` when the game is over.
pub fn next_round_cards(round_no: u8, players: u8) -> Option<u8> {
    let max_cards = max_cards_per_player(players);
    if max_cards == 0 {
        return None;
    }
    let next_cards = max_cards - (round_no % max_cards);
    if next_cards < 1 || round_no >= total_rounds(players) {
        return None;
    }
    Some(next_cards)
}

/// Highest total one seat can reach: an exact bid in every round.
pub fn max_game_score(players: u8) -> u16 {
    (1..=max_cards_per_player(players) as u16)
        .map(|cards| EXACT_BID_BONUS + cards)
        .sum()
}

pub fn valid_bid_range(cards: u8) -> RangeInclusive<u8> {
    0..=cards
}

/// Dealer for the next round: one seat clockwise.
#[inline]
pub fn dealer_after(dealer: Seat, players: u8) -> Seat {
    debug_assert!(players > 0);
    ((dealer as u16 + 1) % players as u16) as Seat
}

/// First bidder for the next round, computed from the dealer *before* rotation.
///
/// `(dealer + 2) mod n` is the seat immediately after the new dealer.
#[inline]
pub fn first_bidder_after(dealer_before: Seat, players: u8) -> Seat {
    debug_assert!(players > 0);
    ((dealer_before as u16 + 2) % players as u16) as Seat
}

/// First bidder of round 1 (dealer is seat 0).
#[inline]
pub fn initial_first_bidder(players: u8) -> Seat {
    debug_assert!(players > 0);
    1 % players
}
