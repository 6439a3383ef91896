#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod store;
pub mod telemetry;

// Re-exports for public API
pub use config::{AppConfig, LogFormat};
pub use domain::snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
pub use domain::state::{GameState, Phase, Player, Seat};
pub use domain::trump::TrumpSuit;
pub use domain::GameTransition;
pub use engine::{GameAction, GameEngine, GameSession};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    judgement_test_support::test_logging::init();
}
