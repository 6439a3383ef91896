//! Game engine: the single place where `GameState` changes.
//!
//! `GameEngine` is stateless. Each entry point validates the action against
//! the current phase and inputs before touching the state, so a rejected
//! action never leaves a partial mutation behind. `GameEngine::apply` goes
//! one step further and works on a copy, returning the next state.
//!
//! Persistence is not done here; see [`session::GameSession`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::state::{GameState, Seat};
use crate::domain::trump::TrumpSuit;
use crate::errors::domain::DomainError;

mod player_actions;
mod round_lifecycle;
pub mod session;

pub use session::GameSession;

/// Every user action the presentation layer can forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum GameAction {
    SetPlayerCount(u8),
    SetPlayerName { index: u8, name: String },
    /// Empty `names` starts with the names typed into the setup draft.
    StartGame { names: Vec<String> },
    SetTrumpSuit(TrumpSuit),
    ConfirmTrump,
    SubmitBid(u8),
    EditBid(Seat),
    StartRound,
    SubmitHandsWon { seat: Seat, count: u8 },
    NextRound,
    ResetGame { confirmed: bool },
}

impl GameAction {
    pub fn name(&self) -> &'static str {
        match self {
            GameAction::SetPlayerCount(_) => "set_player_count",
            GameAction::SetPlayerName { .. } => "set_player_name",
            GameAction::StartGame { .. } => "start_game",
            GameAction::SetTrumpSuit(_) => "set_trump_suit",
            GameAction::ConfirmTrump => "confirm_trump",
            GameAction::SubmitBid(_) => "submit_bid",
            GameAction::EditBid(_) => "edit_bid",
            GameAction::StartRound => "start_round",
            GameAction::SubmitHandsWon { .. } => "submit_hands_won",
            GameAction::NextRound => "next_round",
            GameAction::ResetGame { .. } => "reset_game",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GameEngine;

impl GameEngine {
    pub fn new() -> Self {
        Self
    }

    /// Apply `action` to a copy of `state` and return the resulting state.
    pub fn apply(&self, state: &GameState, action: GameAction) -> Result<GameState, DomainError> {
        let mut next = state.clone();
        self.dispatch(&mut next, action)?;
        Ok(next)
    }

    /// Apply `action` in place.
    pub fn dispatch(&self, state: &mut GameState, action: GameAction) -> Result<(), DomainError> {
        debug!(action = action.name(), phase = ?state.phase, "Applying action");
        match action {
            GameAction::SetPlayerCount(n) => self.set_player_count(state, n),
            GameAction::SetPlayerName { index, name } => self.set_player_name(state, index, name),
            GameAction::StartGame { names } => self.start_game(state, &names),
            GameAction::SetTrumpSuit(suit) => self.set_trump_suit(state, suit),
            GameAction::ConfirmTrump => self.confirm_trump(state),
            GameAction::SubmitBid(value) => self.submit_bid(state, value).map(|_| ()),
            GameAction::EditBid(seat) => self.edit_bid(state, seat),
            GameAction::StartRound => self.start_round(state),
            GameAction::SubmitHandsWon { seat, count } => {
                self.submit_hands_won(state, seat, count).map(|_| ())
            }
            GameAction::NextRound => self.next_round(state),
            GameAction::ResetGame { confirmed } => self.reset_game(state, confirmed),
        }
    }
}
