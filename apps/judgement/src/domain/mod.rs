//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod standings;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{forbidden_bid, legal_bids};
pub use game_transition::{derive_game_transitions, GameTransition};
pub use rules::{max_cards_per_player, next_round_cards, total_rounds};
pub use snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
pub use standings::{standings, winner, Standing};
pub use state::{GameState, Phase, Player, Seat, SetupDraft};
pub use trump::TrumpSuit;
