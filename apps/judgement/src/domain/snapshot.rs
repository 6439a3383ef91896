//! Public snapshot API for rendering game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::forbidden_bid;
use crate::domain::rules::{max_cards_per_player, total_rounds, valid_bid_range};
use crate::domain::standings::{standings, winner, Standing};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::tricks::pending_seats;
use crate::domain::trump::TrumpSuit;

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub seat: Seat,
    pub name: String,
    pub total_score: u16,
    pub is_dealer: bool,
    pub is_first_bidder: bool,
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeader {
    pub round_no: u8,
    pub total_rounds: u8,
    pub cards_this_round: u8,
    pub dealer: Seat,
    pub first_bidder: Seat,
    pub trump: TrumpSuit,
    pub players: Vec<PlayerPublic>,
    pub cumulative_scores: Vec<u16>,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Setup(SetupSnapshot),
    TrumpSelection(TrumpSelectionSnapshot),
    Bidding(BiddingSnapshot),
    Playing(PlayingSnapshot),
    RoundEnd(RoundEndSnapshot),
    GameEnd(GameEndSnapshot),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSnapshot {
    pub num_players: u8,
    pub player_names: Vec<String>,
    pub max_cards: u8,
    pub total_rounds: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumpSelectionSnapshot {
    pub selected: TrumpSuit,
    pub default_for_round: TrumpSuit,
    pub allowed: Vec<TrumpSuit>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    /// None once every bid is in (review step).
    pub to_act: Option<Seat>,
    pub bids: Vec<Option<u8>>,
    pub min_bid: u8,
    pub max_bid: u8,
    pub forbidden_bid: Option<u8>,
    pub is_last_bidder: bool,
    pub bidding_complete: bool,
    pub bids_total: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub bids: Vec<Option<u8>>,
    pub hands_won: Vec<Option<u8>>,
    pub pending: Vec<Seat>,
}

/// One row of the round summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResultRow {
    pub seat: Seat,
    pub name: String,
    pub bid: Option<u8>,
    pub won: Option<u8>,
    pub score: u16,
    pub made: bool,
    pub total: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEndSnapshot {
    pub results: Vec<RoundResultRow>,
    pub standings: Vec<Standing>,
    pub is_last_round: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEndSnapshot {
    pub winner: Option<Standing>,
    pub standings: Vec<Standing>,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; produces safe defaults for inconsistent states.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| PlayerPublic {
            seat: i as Seat,
            name: p.name.clone(),
            total_score: p.total_score,
            is_dealer: i as Seat == state.dealer_index,
            is_first_bidder: i as Seat == state.first_bidder_index,
        })
        .collect();

    let game = GameHeader {
        round_no: state.current_round,
        total_rounds: state.total_rounds(),
        cards_this_round: state.cards_this_round,
        dealer: state.dealer_index,
        first_bidder: state.first_bidder_index,
        trump: state.trump_suit,
        players,
        cumulative_scores: state.cumulative_scores.clone(),
    };

    let phase = match state.phase {
        Phase::Setup => snapshot_setup(state),
        Phase::TrumpSelection => snapshot_trump_selection(state),
        Phase::Bidding => snapshot_bidding(state),
        Phase::Playing => snapshot_playing(state),
        Phase::RoundEnd => snapshot_round_end(state),
        Phase::GameEnd => snapshot_game_end(state),
    };

    GameSnapshot { game, phase }
}

fn snapshot_setup(state: &GameState) -> PhaseSnapshot {
    let n = state.draft.num_players;
    PhaseSnapshot::Setup(SetupSnapshot {
        num_players: n,
        player_names: state.draft.player_names.clone(),
        max_cards: max_cards_per_player(n),
        total_rounds: total_rounds(n),
    })
}

fn snapshot_trump_selection(state: &GameState) -> PhaseSnapshot {
    PhaseSnapshot::TrumpSelection(TrumpSelectionSnapshot {
        selected: state.trump_suit,
        default_for_round: TrumpSuit::for_round(state.current_round),
        allowed: TrumpSuit::ROTATION.to_vec(),
    })
}

fn snapshot_bidding(state: &GameState) -> PhaseSnapshot {
    let range = valid_bid_range(state.cards_this_round);
    let to_act = (!state.bidding_complete)
        .then_some(state.current_bidder_index)
        .filter(|&s| (s as usize) < state.players.len());

    PhaseSnapshot::Bidding(BiddingSnapshot {
        to_act,
        bids: state.bids.clone(),
        min_bid: *range.start(),
        max_bid: *range.end(),
        forbidden_bid: forbidden_bid(state),
        is_last_bidder: state.is_last_bidder(),
        bidding_complete: state.bidding_complete,
        bids_total: state.bids_total(),
    })
}

fn snapshot_playing(state: &GameState) -> PhaseSnapshot {
    PhaseSnapshot::Playing(PlayingSnapshot {
        bids: state.bids.clone(),
        hands_won: state.hands_won.clone(),
        pending: pending_seats(state),
    })
}

fn snapshot_round_end(state: &GameState) -> PhaseSnapshot {
    let last = state.round_scores.last();
    let results = state
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let bid = state.bids.get(i).copied().flatten();
            let won = state.hands_won.get(i).copied().flatten();
            RoundResultRow {
                seat: i as Seat,
                name: p.name.clone(),
                bid,
                won,
                score: last.and_then(|row| row.get(i)).copied().unwrap_or(0),
                made: bid.is_some() && bid == won,
                total: state.cumulative_scores.get(i).copied().unwrap_or(0),
            }
        })
        .collect();

    PhaseSnapshot::RoundEnd(RoundEndSnapshot {
        results,
        standings: standings(state),
        is_last_round: state.is_last_round(),
    })
}

fn snapshot_game_end(state: &GameState) -> PhaseSnapshot {
    PhaseSnapshot::GameEnd(GameEndSnapshot {
        winner: winner(state),
        standings: standings(state),
    })
}
