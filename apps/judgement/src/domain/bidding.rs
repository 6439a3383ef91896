//! Bid entry: seat-ordered submission, the last-bidder restriction, and edits.

use tracing::debug;

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{
    next_seat, next_unset_seat, require_phase, require_seat, require_slots, GameState, Phase,
    Seat,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// The one value the last bidder may not choose.
///
/// Defined only while exactly one bid slot is open; equals
/// `cards - sum(bids so far)` when that lies in `[0, cards]`.
pub fn forbidden_bid(state: &GameState) -> Option<u8> {
    if !state.is_last_bidder() {
        return None;
    }
    let cards = state.cards_this_round as u16;
    let sum = state.bids_total();
    if sum > cards {
        return None;
    }
    Some((cards - sum) as u8)
}

/// Bids the pending bidder may submit right now.
pub fn legal_bids(state: &GameState) -> Vec<u8> {
    let forbidden = forbidden_bid(state);
    valid_bid_range(state.cards_this_round)
        .filter(|&b| Some(b) != forbidden)
        .collect()
}

pub fn bids_ready(state: &GameState) -> bool {
    !state.bids.is_empty() && state.bids.iter().all(Option::is_some)
}

/// Record a bid for the pending bidder and advance to the next open seat.
///
/// Returns the seat the bid was recorded for. Nothing is mutated on error.
pub fn place_bid(state: &mut GameState, value: u8) -> Result<Seat, DomainError> {
    require_phase(state, Phase::Bidding, "place_bid")?;
    if state.bidding_complete {
        return Err(DomainError::phase_mismatch(
            "Bidding is complete; edit a bid or start the round",
        ));
    }

    require_slots(state, &state.bids, "bids")?;
    let players = state.player_count();
    let who = require_seat(state, state.current_bidder_index, "place_bid")?;
    // A stale pointer at a filled slot resolves to the next open one.
    let who = if state.bids[who].is_some() {
        next_unset_seat(&state.bids, who as Seat)
            .map(|s| s as usize)
            .ok_or_else(|| DomainError::validation_other("No open bid slot"))?
    } else {
        who
    };

    let range = valid_bid_range(state.cards_this_round);
    if !range.contains(&value) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("Bid must be in range {range:?}, got {value}"),
        ));
    }

    if forbidden_bid(state) == Some(value) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!(
                "Last bidder cannot bid {value}: total bids would equal {} cards",
                state.cards_this_round
            ),
        ));
    }

    state.bids[who] = Some(value);
    if bids_ready(state) {
        state.bidding_complete = true;
        state.current_bidder_index = who as Seat;
    } else if let Some(next) = next_unset_seat(&state.bids, next_seat(who as Seat, players)) {
        state.current_bidder_index = next;
    }

    debug!(
        seat = who,
        bid = value,
        complete = state.bidding_complete,
        "Bid recorded"
    );
    Ok(who as Seat)
}

/// Re-open a placed bid so the next `place_bid` re-fills exactly that seat.
///
/// Other bids are left untouched; the forbidden value is recomputed on the
/// next submission.
pub fn edit_bid(state: &mut GameState, seat: Seat) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding, "edit_bid")?;
    require_slots(state, &state.bids, "bids")?;
    let idx = require_seat(state, seat, "edit_bid")?;
    if state.bids[idx].is_none() {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} has no bid to edit"),
        ));
    }

    state.bids[idx] = None;
    state.bidding_complete = false;
    state.current_bidder_index = seat;

    debug!(seat, "Bid re-opened for edit");
    Ok(())
}
