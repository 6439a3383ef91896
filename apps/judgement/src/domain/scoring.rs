use tracing::info;

use crate::domain::rules::EXACT_BID_BONUS;
use crate::domain::state::{GameState, Phase};
use crate::errors::domain::DomainError;

/// Result of scoring one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScoring {
    pub round_no: u8,
    pub scores: Vec<u16>,
}

/// Exact bid scores `10 + bid`; anything else scores nothing.
pub fn round_score(bid: u8, won: u8) -> u16 {
    if bid == won {
        EXACT_BID_BONUS + bid as u16
    } else {
        0
    }
}

/// Apply per-round scoring and transition to RoundEnd.
///
/// No-op (returns `None`) unless the game is Playing with every bid and
/// hands-won slot filled, so a round can never be scored twice.
pub fn apply_round_scoring(state: &mut GameState) -> Option<RoundScoring> {
    if state.phase != Phase::Playing {
        return None;
    }
    let n = state.players.len();
    if n == 0 || state.bids.len() != n || state.hands_won.len() != n {
        return None;
    }

    let mut scores = Vec::with_capacity(n);
    for (bid, won) in state.bids.iter().zip(state.hands_won.iter()) {
        match (bid, won) {
            (Some(b), Some(w)) => scores.push(round_score(*b, *w)),
            _ => return None,
        }
    }

    state.cumulative_scores.resize(n, 0);
    for (i, &score) in scores.iter().enumerate() {
        state.cumulative_scores[i] = state.cumulative_scores[i].saturating_add(score);
        state.players[i].total_score = state.players[i].total_score.saturating_add(score);
    }
    state.round_scores.push(scores.clone());
    state.phase = Phase::RoundEnd;

    info!(
        round_no = state.current_round,
        scores = ?scores,
        totals = ?state.cumulative_scores,
        "Round scored"
    );

    Some(RoundScoring {
        round_no: state.current_round,
        scores,
    })
}

/// Per-seat sums of the round history. `None` when a row is not `players`
/// wide or a sum does not fit in `u16`.
pub fn column_totals(round_scores: &[Vec<u16>], players: usize) -> Option<Vec<u16>> {
    let mut sums = vec![0u16; players];
    for row in round_scores {
        if row.len() != players {
            return None;
        }
        for (sum, &score) in sums.iter_mut().zip(row) {
            *sum = sum.checked_add(score)?;
        }
    }
    Some(sums)
}

/// Check that running totals are the column sums of the round history.
pub fn verify_score_ledger(state: &GameState) -> Result<(), DomainError> {
    let n = state.cumulative_scores.len();
    if let Some((r, row)) = state
        .round_scores
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != n)
    {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: round {} has {} scores for {n} players",
            r + 1,
            row.len()
        )));
    }
    let sums = column_totals(&state.round_scores, n).ok_or_else(|| {
        DomainError::validation_other("Invariant violated: round history sums overflow")
    })?;
    if sums != state.cumulative_scores {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: totals {:?} do not match round history sums {sums:?}",
            state.cumulative_scores
        )));
    }
    Ok(())
}
