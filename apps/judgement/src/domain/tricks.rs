//! Hands-won entry during the Playing phase.

use tracing::debug;

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{require_phase, require_seat, require_slots, GameState, Phase, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Record how many tricks `seat` won this round.
///
/// Slots may be filled in any order and re-entered until the last one is
/// set. Totals are not checked against `cards_this_round`.
/// Returns true once every slot is set.
pub fn record_hands_won(
    state: &mut GameState,
    seat: Seat,
    count: u8,
) -> Result<bool, DomainError> {
    require_phase(state, Phase::Playing, "record_hands_won")?;
    require_slots(state, &state.hands_won, "hands_won")?;
    let idx = require_seat(state, seat, "record_hands_won")?;

    let range = valid_bid_range(state.cards_this_round);
    if !range.contains(&count) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTrickCount,
            format!("Hands won must be in range {range:?}, got {count}"),
        ));
    }

    state.hands_won[idx] = Some(count);
    debug!(seat, count, "Hands won recorded");
    Ok(state.hands_won_ready())
}

/// Seats whose hands-won entry is still missing.
pub fn pending_seats(state: &GameState) -> Vec<Seat> {
    state
        .hands_won
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_none())
        .map(|(i, _)| i as Seat)
        .collect()
}
