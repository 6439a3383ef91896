//! Ranked standings and winner selection.
//!
//! Ordering is a stable sort by cumulative score, highest first. Players on
//! equal scores keep seat order, so the winner of a tie is whoever sits
//! earliest at the table.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position in the table.
    pub rank: u8,
    pub seat: Seat,
    pub name: String,
    pub score: u16,
}

pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut rows: Vec<(Seat, &str, u16)> = state
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let score = state.cumulative_scores.get(i).copied().unwrap_or(0);
            (i as Seat, p.name.as_str(), score)
        })
        .collect();
    // sort_by is stable: ties stay in seat order
    rows.sort_by(|a, b| b.2.cmp(&a.2));

    rows.into_iter()
        .enumerate()
        .map(|(pos, (seat, name, score))| Standing {
            rank: pos as u8 + 1,
            seat,
            name: name.to_string(),
            score,
        })
        .collect()
}

pub fn winner(state: &GameState) -> Option<Standing> {
    standings(state).into_iter().next()
}
