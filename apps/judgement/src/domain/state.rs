use serde::{Deserialize, Serialize};

use crate::domain::rules;
use crate::domain::trump::TrumpSuit;
use crate::errors::domain::{DomainError, ValidationKind};

/// Index into `GameState::players` (0-based, clockwise).
pub type Seat = u8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Collecting player count and names.
    #[default]
    Setup,
    /// Dealer confirms (or overrides) the round's trump suit.
    TrumpSelection,
    /// Players bid in seat order; ends in a review step once every slot is set.
    Bidding,
    /// Tricks are played at the table; hands won are entered in any order.
    Playing,
    /// Round scored; standings shown until the next round is requested.
    RoundEnd,
    /// All rounds complete.
    GameEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub total_score: u16,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
        }
    }
}

/// The setup form as typed so far: player count and the names entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupDraft {
    pub num_players: u8,
    pub player_names: Vec<String>,
}

impl Default for SetupDraft {
    fn default() -> Self {
        Self {
            num_players: 4,
            player_names: vec![String::new()],
        }
    }
}

/// Entire game container. Owned by a single caller and mutated only through
/// the engine; the snapshot store persists it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    /// Fixed once setup completes; emptied only by reset.
    pub players: Vec<Player>,
    pub draft: SetupDraft,
    /// 1-based round number.
    pub current_round: u8,
    /// Cards dealt to each player this round (0 before the game starts).
    pub cards_this_round: u8,
    pub dealer_index: Seat,
    pub first_bidder_index: Seat,
    pub trump_suit: TrumpSuit,
    /// One slot per player; `None` until that player bids.
    pub bids: Vec<Option<u8>>,
    /// One slot per player; `None` until entered.
    pub hands_won: Vec<Option<u8>>,
    /// Seat whose bid is pending.
    pub current_bidder_index: Seat,
    /// True once every bid slot is set.
    pub bidding_complete: bool,
    /// Append-only per-round score history.
    pub round_scores: Vec<Vec<u16>>,
    /// Running totals; always the column sums of `round_scores`.
    pub cumulative_scores: Vec<u16>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The initial empty state (no game in progress).
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            players: Vec::new(),
            draft: SetupDraft::default(),
            current_round: 1,
            cards_this_round: 0,
            dealer_index: 0,
            first_bidder_index: 0,
            trump_suit: TrumpSuit::Hearts,
            bids: Vec::new(),
            hands_won: Vec::new(),
            current_bidder_index: 0,
            bidding_complete: false,
            round_scores: Vec::new(),
            cumulative_scores: Vec::new(),
        }
    }

    pub fn player_count(&self) -> u8 {
        self.players.len() as u8
    }

    pub fn total_rounds(&self) -> u8 {
        rules::total_rounds(self.player_count())
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round >= self.total_rounds()
    }

    pub fn bids_placed(&self) -> usize {
        self.bids.iter().filter(|b| b.is_some()).count()
    }

    pub fn bids_total(&self) -> u16 {
        self.bids.iter().flatten().map(|&b| b as u16).sum()
    }

    /// True when exactly one bid slot remains open.
    pub fn is_last_bidder(&self) -> bool {
        !self.players.is_empty() && self.bids_placed() + 1 == self.players.len()
    }

    pub fn hands_won_ready(&self) -> bool {
        !self.hands_won.is_empty() && self.hands_won.iter().all(Option::is_some)
    }
}

/// Returns the next seat clockwise, wrapping at `players`.
#[inline]
pub fn next_seat(seat: Seat, players: u8) -> Seat {
    debug_assert!(players > 0);
    ((seat as u16 + 1) % players as u16) as Seat
}

/// First seat at or after `from` (clockwise) whose slot is still `None`.
pub fn next_unset_seat(slots: &[Option<u8>], from: Seat) -> Option<Seat> {
    let n = slots.len();
    (0..n)
        .map(|step| (from as usize + step) % n)
        .find(|&idx| slots[idx].is_none())
        .map(|idx| idx as Seat)
}

pub fn require_seat(
    state: &GameState,
    seat: Seat,
    ctx: &'static str,
) -> Result<usize, DomainError> {
    let idx = seat as usize;
    if idx >= state.players.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!(
                "Seat {seat} does not exist ({} players) ({ctx})",
                state.players.len()
            ),
        ));
    }
    Ok(idx)
}

/// Per-player slot vectors must match the seating.
pub fn require_slots(
    state: &GameState,
    slots: &[Option<u8>],
    what: &'static str,
) -> Result<(), DomainError> {
    if slots.len() != state.players.len() {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: {what} has {} slots for {} players",
            slots.len(),
            state.players.len()
        )));
    }
    Ok(())
}

pub fn require_phase(
    state: &GameState,
    phase: Phase,
    ctx: &'static str,
) -> Result<(), DomainError> {
    if state.phase != phase {
        return Err(DomainError::phase_mismatch(format!(
            "Expected phase {phase:?} but game is in {:?} ({ctx})",
            state.phase
        )));
    }
    Ok(())
}
