use serde::{Deserialize, Serialize};

use crate::domain::standings::winner;
use crate::domain::state::{GameState, Phase, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: Setup -> first trump selection.
    GameStarted { players: u8 },

    /// Edge-triggered: any phase change.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: a (different) seat is now expected to bid.
    BidderBecame { seat: Seat },

    /// Edge-triggered: a new row was appended to the round history.
    RoundScored { round_no: u8, scores: Vec<u16> },

    /// Edge-triggered: a new round was set up.
    RoundAdvanced { round_no: u8, cards: u8, dealer: Seat },

    /// Edge-triggered: game moved into GameEnd.
    GameEnded { winner: Option<Seat> },

    /// Edge-triggered: players cleared and back to Setup.
    GameReset,
}

/// Derive transitions from before/after state.
pub fn derive_game_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Reset (players existed, now gone and back in Setup)
    if !before.players.is_empty() && after.players.is_empty() && after.phase == Phase::Setup {
        transitions.push(GameTransition::GameReset);
    }

    // 2. Game start
    if before.phase == Phase::Setup && after.phase == Phase::TrumpSelection {
        transitions.push(GameTransition::GameStarted {
            players: after.player_count(),
        });
    }

    // 3. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 4. Bidder turn
    if after.phase == Phase::Bidding && !after.bidding_complete {
        let was_waiting_on = (before.phase == Phase::Bidding && !before.bidding_complete)
            .then_some(before.current_bidder_index);
        if was_waiting_on != Some(after.current_bidder_index) {
            transitions.push(GameTransition::BidderBecame {
                seat: after.current_bidder_index,
            });
        }
    }

    // 5. Round scored
    if after.round_scores.len() > before.round_scores.len() {
        if let Some(scores) = after.round_scores.last() {
            transitions.push(GameTransition::RoundScored {
                round_no: after.current_round,
                scores: scores.clone(),
            });
        }
    }

    // 6. Next round
    if before.phase == Phase::RoundEnd
        && after.phase == Phase::TrumpSelection
        && after.current_round != before.current_round
    {
        transitions.push(GameTransition::RoundAdvanced {
            round_no: after.current_round,
            cards: after.cards_this_round,
            dealer: after.dealer_index,
        });
    }

    // 7. Game end
    if before.phase != Phase::GameEnd && after.phase == Phase::GameEnd {
        transitions.push(GameTransition::GameEnded {
            winner: winner(after).map(|w| w.seat),
        });
    }

    transitions
}
