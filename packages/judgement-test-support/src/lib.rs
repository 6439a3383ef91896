//! Shared helpers for the judgement integration tests: one-time logging
//! setup and table fixtures.

pub mod table;
pub mod test_logging;
