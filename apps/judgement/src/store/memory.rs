use super::persisted::{decode, encode};
use super::SnapshotStore;
use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

/// In-process store holding the encoded document, so loads go through the
/// same decoding path as the file store.
#[derive(Debug, Default, Clone)]
pub struct MemorySnapshotStore {
    document: Option<String>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw document (e.g. a hand-edited or damaged one).
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<GameState>, DomainError> {
        Ok(self.document.as_deref().map(decode))
    }

    fn save(&mut self, state: &GameState) -> Result<(), DomainError> {
        self.document = Some(encode(state)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DomainError> {
        self.document = None;
        Ok(())
    }
}
