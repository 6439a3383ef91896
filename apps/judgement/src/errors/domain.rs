//! Domain-level error type used across the engine and the snapshot store.
//!
//! This error type is IO- and CLI-agnostic. Outer layers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds. Every rejected user action maps to one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Setup input rejected (too few names, player count out of range).
    InvalidInput,
    /// Bid outside `[0, cards]` or equal to the forbidden value.
    InvalidBid,
    /// Hands-won count outside `[0, cards]`.
    InvalidTrickCount,
    /// Seat index does not exist or refers to an unset slot.
    InvalidSeat,
    /// Action is not valid in the current phase.
    PhaseMismatch,
    /// Unrecognised trump suit text.
    ParseSuit,
    /// Destructive reset requested without confirmation.
    ResetNotConfirmed,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    SnapshotIo,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    Validation(ValidationKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::PhaseMismatch, detail)
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Infra(..) => None,
        }
    }
}
