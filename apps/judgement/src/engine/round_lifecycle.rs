use tracing::{debug, info};

use super::GameEngine;
use crate::domain::bidding::bids_ready;
use crate::domain::rules::{
    dealer_after, first_bidder_after, initial_first_bidder, max_cards_per_player,
    next_round_cards, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::domain::standings::winner;
use crate::domain::state::{require_phase, GameState, Phase, Player};
use crate::domain::trump::TrumpSuit;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameEngine {
    /// Change the setup form's player count; clears the names typed so far.
    pub fn set_player_count(&self, state: &mut GameState, count: u8) -> Result<(), DomainError> {
        require_phase(state, Phase::Setup, "set_player_count")?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidInput,
                format!(
                    "Player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {count}"
                ),
            ));
        }
        state.draft.num_players = count;
        state.draft.player_names = vec![String::new(); count as usize];
        Ok(())
    }

    pub fn set_player_name(
        &self,
        state: &mut GameState,
        index: u8,
        name: String,
    ) -> Result<(), DomainError> {
        require_phase(state, Phase::Setup, "set_player_name")?;
        if index >= state.draft.num_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!(
                    "Name slot {index} does not exist ({} players)",
                    state.draft.num_players
                ),
            ));
        }
        let idx = index as usize;
        if state.draft.player_names.len() <= idx {
            state.draft.player_names.resize(idx + 1, String::new());
        }
        state.draft.player_names[idx] = name;
        Ok(())
    }

    /// Seat the players and set up round 1.
    ///
    /// Blank names are dropped and the rest trimmed; at least two must
    /// remain. An empty `names` slice uses the setup draft.
    pub fn start_game(&self, state: &mut GameState, names: &[String]) -> Result<(), DomainError> {
        require_phase(state, Phase::Setup, "start_game")?;

        let source = if names.is_empty() {
            state.draft.player_names.as_slice()
        } else {
            names
        };
        let valid: Vec<String> = source
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();

        if valid.len() < MIN_PLAYERS as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidInput,
                format!("Please enter at least {MIN_PLAYERS} player names"),
            ));
        }
        if valid.len() > MAX_PLAYERS as usize {
            return Err(DomainError::validation(
                ValidationKind::InvalidInput,
                format!(
                    "At most {MAX_PLAYERS} players can share a deck, got {}",
                    valid.len()
                ),
            ));
        }

        let n = valid.len() as u8;
        state.players = valid.into_iter().map(Player::new).collect();
        state.current_round = 1;
        state.cards_this_round = max_cards_per_player(n);
        state.dealer_index = 0;
        state.first_bidder_index = initial_first_bidder(n);
        state.trump_suit = TrumpSuit::for_round(1);
        state.bids = Vec::new();
        state.hands_won = Vec::new();
        state.current_bidder_index = 0;
        state.bidding_complete = false;
        state.cumulative_scores = vec![0; n as usize];
        state.round_scores = Vec::new();
        state.phase = Phase::TrumpSelection;

        info!(
            players = n,
            cards = state.cards_this_round,
            total_rounds = state.total_rounds(),
            "Game started"
        );
        Ok(())
    }

    /// Dealer override of the round's default trump.
    pub fn set_trump_suit(
        &self,
        state: &mut GameState,
        suit: TrumpSuit,
    ) -> Result<(), DomainError> {
        require_phase(state, Phase::TrumpSelection, "set_trump_suit")?;
        state.trump_suit = suit;
        debug!(trump = suit.name(), "Trump selected");
        Ok(())
    }

    /// Lock in trump and open bidding at the round's first bidder.
    pub fn confirm_trump(&self, state: &mut GameState) -> Result<(), DomainError> {
        require_phase(state, Phase::TrumpSelection, "confirm_trump")?;
        state.bids = vec![None; state.players.len()];
        state.current_bidder_index = state.first_bidder_index;
        state.bidding_complete = false;
        state.phase = Phase::Bidding;

        debug!(
            round_no = state.current_round,
            trump = state.trump_suit.name(),
            first_bidder = state.first_bidder_index,
            "Transition: TrumpSelection -> Bidding"
        );
        Ok(())
    }

    /// Leave the bid review and start entering hands won.
    pub fn start_round(&self, state: &mut GameState) -> Result<(), DomainError> {
        require_phase(state, Phase::Bidding, "start_round")?;
        if !state.bidding_complete || !bids_ready(state) {
            return Err(DomainError::phase_mismatch(format!(
                "Bidding is not complete ({} of {} bids in)",
                state.bids_placed(),
                state.players.len()
            )));
        }
        state.hands_won = vec![None; state.players.len()];
        state.phase = Phase::Playing;

        debug!(round_no = state.current_round, "Transition: Bidding -> Playing");
        Ok(())
    }

    /// Advance to the next round, or end the game after the last one.
    pub fn next_round(&self, state: &mut GameState) -> Result<(), DomainError> {
        require_phase(state, Phase::RoundEnd, "next_round")?;
        let n = state.player_count();

        let Some(cards) = next_round_cards(state.current_round, n) else {
            state.phase = Phase::GameEnd;
            let w = winner(state);
            info!(
                rounds = state.round_scores.len(),
                winner = ?w.as_ref().map(|s| s.name.as_str()),
                score = ?w.as_ref().map(|s| s.score),
                "Game over"
            );
            return Ok(());
        };

        let dealer_before = state.dealer_index;
        state.current_round += 1;
        state.cards_this_round = cards;
        state.dealer_index = dealer_after(dealer_before, n);
        state.first_bidder_index = first_bidder_after(dealer_before, n);
        state.trump_suit = TrumpSuit::for_round(state.current_round);
        state.phase = Phase::TrumpSelection;

        info!(
            round_no = state.current_round,
            cards,
            dealer = state.dealer_index,
            first_bidder = state.first_bidder_index,
            "Round advanced"
        );
        Ok(())
    }

    /// Discard everything and return to Setup. Requires explicit confirmation.
    pub fn reset_game(&self, state: &mut GameState, confirmed: bool) -> Result<(), DomainError> {
        if !confirmed {
            return Err(DomainError::validation(
                ValidationKind::ResetNotConfirmed,
                "Starting a new game discards current progress; confirm to continue",
            ));
        }
        *state = GameState::new();
        info!("Game reset");
        Ok(())
    }
}
