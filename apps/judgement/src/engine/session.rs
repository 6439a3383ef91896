//! A game bound to a snapshot store.
//!
//! Every accepted action is persisted before the in-memory state moves
//! forward: if the save fails the session keeps the previous state and
//! reports the storage error.

use tracing::{info, warn};

use super::{GameAction, GameEngine};
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::scoring::verify_score_ledger;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;
use crate::store::SnapshotStore;

pub struct GameSession<S: SnapshotStore> {
    engine: GameEngine,
    store: S,
    state: GameState,
}

impl<S: SnapshotStore> GameSession<S> {
    /// Restore the saved game, or start from an empty Setup when none exists.
    pub fn open(store: S) -> Result<Self, DomainError> {
        let state = match store.load()? {
            Some(state) => {
                if let Err(e) = verify_score_ledger(&state) {
                    warn!(error = %e, "Saved scores are inconsistent");
                }
                info!(phase = ?state.phase, round_no = state.current_round, "Resumed saved game");
                state
            }
            None => GameState::new(),
        };
        Ok(Self {
            engine: GameEngine::new(),
            store,
            state,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply one action, persist the result and return what changed.
    ///
    /// A reset clears the store instead of saving the empty state.
    pub fn dispatch(&mut self, action: GameAction) -> Result<Vec<GameTransition>, DomainError> {
        let name = action.name();
        let is_reset = matches!(action, GameAction::ResetGame { .. });

        let next = match self.engine.apply(&self.state, action) {
            Ok(next) => next,
            Err(e) => {
                warn!(action = name, phase = ?self.state.phase, error = %e, "Action rejected");
                return Err(e);
            }
        };

        if is_reset {
            self.store.clear()?;
        } else {
            self.store.save(&next)?;
        }

        let transitions = derive_game_transitions(&self.state, &next);
        self.state = next;

        for t in &transitions {
            info!(action = name, transition = ?t, "Game transition");
        }
        Ok(transitions)
    }
}
