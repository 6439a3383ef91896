//! On-disk document format and its lenient decoder.
//!
//! Keys are camelCase (`gamePhase`, `cardsThisRound`, ...). Decoding never
//! fails: each field is read on its own and falls back to the initial value
//! when missing or malformed, so one damaged field does not discard a game.
//! The decoded fields are then reconciled with each other before the state
//! reaches the engine.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::rules::{
    max_cards_per_player, max_game_score, total_rounds, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::domain::scoring::{column_totals, verify_score_ledger};
use crate::domain::state::{
    next_seat, next_unset_seat, GameState, Phase, Player, Seat, SetupDraft,
};
use crate::domain::trump::TrumpSuit;
use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedGame<'a> {
    game_phase: Phase,
    players: &'a [Player],
    num_players: u8,
    player_names: &'a [String],
    current_round: u8,
    cards_this_round: u8,
    dealer_index: Seat,
    first_bidder_index: Seat,
    trump_suit: TrumpSuit,
    bids: &'a [Option<u8>],
    hands_won: &'a [Option<u8>],
    current_bidder_index: Seat,
    bidding_complete: bool,
    round_scores: &'a [Vec<u16>],
    cumulative_scores: &'a [u16],
}

impl<'a> From<&'a GameState> for PersistedGame<'a> {
    fn from(state: &'a GameState) -> Self {
        Self {
            game_phase: state.phase,
            players: &state.players,
            num_players: state.draft.num_players,
            player_names: &state.draft.player_names,
            current_round: state.current_round,
            cards_this_round: state.cards_this_round,
            dealer_index: state.dealer_index,
            first_bidder_index: state.first_bidder_index,
            trump_suit: state.trump_suit,
            bids: &state.bids,
            hands_won: &state.hands_won,
            current_bidder_index: state.current_bidder_index,
            bidding_complete: state.bidding_complete,
            round_scores: &state.round_scores,
            cumulative_scores: &state.cumulative_scores,
        }
    }
}

pub fn encode(state: &GameState) -> Result<String, DomainError> {
    serde_json::to_string_pretty(&PersistedGame::from(state)).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("encode snapshot: {e}"),
        )
    })
}

/// Decode a saved document. Never fails; see module docs.
pub fn decode(raw: &str) -> GameState {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Snapshot is not valid JSON; using defaults");
            return GameState::new();
        }
    };
    let Value::Object(map) = value else {
        warn!("Snapshot is not a JSON object; using defaults");
        return GameState::new();
    };

    let defaults = GameState::new();
    let draft_defaults = SetupDraft::default();

    let current_round: u8 = field(&map, "currentRound", defaults.current_round);
    let num_players: u8 = field(&map, "numPlayers", draft_defaults.num_players);

    reconcile(GameState {
        phase: field(&map, "gamePhase", defaults.phase),
        players: field(&map, "players", defaults.players),
        draft: SetupDraft {
            // a count no table can seat is treated as unset; so is round zero
            num_players: if (MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
                num_players
            } else {
                draft_defaults.num_players
            },
            player_names: field(&map, "playerNames", draft_defaults.player_names),
        },
        current_round: if current_round == 0 {
            defaults.current_round
        } else {
            current_round
        },
        cards_this_round: field(&map, "cardsThisRound", defaults.cards_this_round),
        dealer_index: field(&map, "dealerIndex", defaults.dealer_index),
        first_bidder_index: field(&map, "firstBidderIndex", defaults.first_bidder_index),
        trump_suit: field(&map, "trumpSuit", defaults.trump_suit),
        bids: field(&map, "bids", defaults.bids),
        hands_won: field(&map, "handsWon", defaults.hands_won),
        current_bidder_index: field(&map, "currentBidderIndex", defaults.current_bidder_index),
        bidding_complete: field(&map, "biddingComplete", defaults.bidding_complete),
        round_scores: field(&map, "roundScores", defaults.round_scores),
        cumulative_scores: field(&map, "cumulativeScores", defaults.cumulative_scores),
    })
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &'static str, default: T) -> T {
    match map.get(key) {
        None | Some(Value::Null) => {
            debug!(key, "Snapshot field missing; using default");
            default
        }
        Some(v) => match T::deserialize(v) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key, error = %e, "Snapshot field malformed; using default");
                default
            }
        },
    }
}

/// Make independently decoded fields agree with each other.
///
/// A table the deck cannot serve starts over. Everything else is repaired in
/// place: counters are clamped to the schedule, seats past the table and slot
/// vectors sized for another table are reset, and totals that disagree with
/// the round history are rebuilt from it.
fn reconcile(mut state: GameState) -> GameState {
    let n = state.players.len();
    if state.phase == Phase::Setup && n == 0 {
        return state;
    }
    if !(MIN_PLAYERS as usize..=MAX_PLAYERS as usize).contains(&n) {
        warn!(
            players = n,
            phase = ?state.phase,
            "Snapshot seats an unplayable table; starting over"
        );
        return GameState {
            draft: state.draft,
            ..GameState::new()
        };
    }
    if state.phase == Phase::Setup {
        return state;
    }
    let players = n as u8;

    let rounds = total_rounds(players);
    if state.current_round > rounds {
        warn!(
            round_no = state.current_round,
            rounds,
            "Snapshot round is past the last one"
        );
        state.current_round = rounds;
    }
    let max_cards = max_cards_per_player(players);
    if !(1..=max_cards).contains(&state.cards_this_round) {
        let cards = max_cards - (state.current_round - 1);
        warn!(
            cards = state.cards_this_round,
            using = cards,
            "Snapshot card count out of range"
        );
        state.cards_this_round = cards;
    }

    state.dealer_index = seat_or("dealerIndex", state.dealer_index, players, 0);
    let after_dealer = next_seat(state.dealer_index, players);
    state.first_bidder_index =
        seat_or("firstBidderIndex", state.first_bidder_index, players, after_dealer);
    state.current_bidder_index = seat_or(
        "currentBidderIndex",
        state.current_bidder_index,
        players,
        state.first_bidder_index,
    );

    state.bids = slots_or_empty("bids", state.bids, n);
    state.hands_won = slots_or_empty("handsWon", state.hands_won, n);
    reconcile_round_slots(&mut state);
    reconcile_scores(&mut state);
    state
}

fn seat_or(key: &'static str, seat: Seat, players: u8, fallback: Seat) -> Seat {
    if seat < players {
        return seat;
    }
    warn!(key, seat, players, using = fallback, "Snapshot seat is past the table");
    fallback
}

fn slots_or_empty(key: &'static str, slots: Vec<Option<u8>>, players: usize) -> Vec<Option<u8>> {
    if slots.is_empty() || slots.len() == players {
        return slots;
    }
    warn!(
        key,
        slots = slots.len(),
        players,
        "Snapshot slots sized for another table; dropping"
    );
    Vec::new()
}

/// Bidding needs a slot per seat; playing needs every bid in.
fn reconcile_round_slots(state: &mut GameState) {
    let n = state.players.len();
    let bids_in = state.bids.len() == n && state.bids.iter().all(Option::is_some);

    if state.phase == Phase::Playing && !bids_in {
        warn!(bids = ?state.bids, "Snapshot is playing without every bid; reopening bidding");
        state.phase = Phase::Bidding;
        state.hands_won = Vec::new();
        state.current_bidder_index = state.first_bidder_index;
    }

    match state.phase {
        Phase::Bidding => {
            if state.bids.is_empty() {
                state.bids = vec![None; n];
            }
            if state.bidding_complete != bids_in {
                warn!(bidding_complete = bids_in, "Snapshot bidding flag disagrees with bids");
                state.bidding_complete = bids_in;
            }
            if let Some(open) = next_unset_seat(&state.bids, state.first_bidder_index) {
                if state.bids[state.current_bidder_index as usize].is_some() {
                    state.current_bidder_index = open;
                }
            }
        }
        Phase::Playing if state.hands_won.is_empty() => {
            state.hands_won = vec![None; n];
        }
        _ => {}
    }
}

/// Totals must be the column sums of a history no game could exceed.
fn reconcile_scores(state: &mut GameState) {
    let n = state.players.len();
    let ceiling = max_game_score(state.player_count());
    let reachable = |totals: &[u16]| totals.iter().all(|&t| t <= ceiling);

    let consistent =
        state.cumulative_scores.len() == n && verify_score_ledger(state).is_ok();
    if !consistent || !reachable(state.cumulative_scores.as_slice()) {
        match column_totals(&state.round_scores, n).filter(|sums| reachable(sums.as_slice())) {
            Some(sums) => {
                warn!(
                    totals = ?state.cumulative_scores,
                    rebuilt = ?sums,
                    "Snapshot totals disagree with round history; rebuilding"
                );
                state.cumulative_scores = sums;
            }
            None => {
                warn!(
                    rounds = state.round_scores.len(),
                    "Snapshot round history unusable; clearing scores"
                );
                state.round_scores.clear();
                state.cumulative_scores = vec![0; n];
            }
        }
    }

    for (player, &total) in state.players.iter_mut().zip(&state.cumulative_scores) {
        player.total_score = total;
    }
}
