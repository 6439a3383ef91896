//! Snapshot persistence: the whole `GameState` saved as one document.
//!
//! The engine never touches storage itself. `GameSession` loads once at
//! startup and saves after every accepted action (clearing on reset).

mod file;
mod memory;
pub mod persisted;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

pub trait SnapshotStore {
    /// Load the saved game, or `None` when nothing has been saved.
    ///
    /// Malformed content is recovered field by field, never rejected.
    fn load(&self) -> Result<Option<GameState>, DomainError>;

    /// Overwrite the saved game wholesale.
    fn save(&mut self, state: &GameState) -> Result<(), DomainError>;

    /// Remove the saved game. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), DomainError>;
}
