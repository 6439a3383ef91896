//! Error codes for the Judgement score tracker.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what the CLI prints
//! next to a rejected action.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Action validation
    /// Setup input rejected
    InvalidInput,
    /// Invalid or forbidden bid
    InvalidBid,
    /// Invalid hands-won count
    InvalidTrickCount,
    /// Seat index out of range or not editable
    InvalidSeat,
    /// Action not valid in the current phase
    PhaseMismatch,
    /// Unknown trump suit
    ParseSuit,
    /// Reset requested without confirmation
    ResetNotConfirmed,
    /// General validation error
    ValidationError,

    // Snapshot persistence
    /// Snapshot could not be read or written
    SnapshotIo,
    /// Snapshot content could not be encoded or decoded
    DataCorruption,

    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidBid => "INVALID_BID",
            Self::InvalidTrickCount => "INVALID_TRICK_COUNT",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::ParseSuit => "PARSE_SUIT",
            Self::ResetNotConfirmed => "RESET_NOT_CONFIRMED",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::SnapshotIo => "SNAPSHOT_IO",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
