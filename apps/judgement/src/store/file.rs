use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::persisted::{decode, encode};
use super::SnapshotStore;
use crate::domain::state::GameState;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// JSON document on disk. Saves write a sibling temp file and rename it over
/// the target, so a reader never sees a half-written snapshot.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "judgement-game-state.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, op: &str, e: std::io::Error) -> DomainError {
        DomainError::infra(
            InfraErrorKind::SnapshotIo,
            format!("{op} {}: {e}", self.path.display()),
        )
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<GameState>, DomainError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                debug!(path = %self.path.display(), bytes = raw.len(), "Snapshot loaded");
                Ok(Some(decode(&raw)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), error = %e, "Snapshot is not text; using defaults");
                Ok(Some(GameState::new()))
            }
            Err(e) => Err(self.io_error("read", e)),
        }
    }

    fn save(&mut self, state: &GameState) -> Result<(), DomainError> {
        let document = encode(state)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error("create dir for", e))?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, document).map_err(|e| self.io_error("write temp for", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error("replace", e))?;
        debug!(path = %self.path.display(), phase = ?state.phase, "Snapshot saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DomainError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Snapshot cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error("remove", e)),
        }
    }
}
