use tracing::info;

use super::GameEngine;
use crate::domain::bidding::{edit_bid, place_bid};
use crate::domain::scoring::{apply_round_scoring, RoundScoring};
use crate::domain::state::{GameState, Seat};
use crate::domain::tricks::record_hands_won;
use crate::errors::domain::DomainError;

impl GameEngine {
    /// Submit the pending bidder's bid.
    ///
    /// Rejects values outside `[0, cards]` and, for the last bidder, the
    /// value that would make total bids equal the cards dealt.
    /// Returns the seat the bid was recorded for.
    pub fn submit_bid(&self, state: &mut GameState, value: u8) -> Result<Seat, DomainError> {
        let seat = place_bid(state, value)?;
        if state.bidding_complete {
            info!(
                round_no = state.current_round,
                bids_total = state.bids_total(),
                cards = state.cards_this_round,
                "All bids in"
            );
        }
        Ok(seat)
    }

    /// Clear a placed bid; the next `submit_bid` fills that seat again.
    pub fn edit_bid(&self, state: &mut GameState, seat: Seat) -> Result<(), DomainError> {
        edit_bid(state, seat)
    }

    /// Enter hands won for `seat`. Scores the round automatically once every
    /// seat has an entry.
    pub fn submit_hands_won(
        &self,
        state: &mut GameState,
        seat: Seat,
        count: u8,
    ) -> Result<Option<RoundScoring>, DomainError> {
        let ready = record_hands_won(state, seat, count)?;
        if !ready {
            return Ok(None);
        }
        Ok(apply_round_scoring(state))
    }
}
