use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Snapshot error: {detail}")]
    Snapshot { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Snapshot { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Helper method to extract error detail from any error variant
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::Snapshot { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
        }
    }

    /// Process exit status for the CLI: 2 for rejected user input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation { .. } => 2,
            AppError::Snapshot { .. } | AppError::Config { .. } | AppError::Internal { .. } => 1,
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn snapshot(code: ErrorCode, detail: String) -> Self {
        Self::Snapshot { code, detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidInput => ErrorCode::InvalidInput,
                    ValidationKind::InvalidBid => ErrorCode::InvalidBid,
                    ValidationKind::InvalidTrickCount => ErrorCode::InvalidTrickCount,
                    ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                    ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    ValidationKind::ParseSuit => ErrorCode::ParseSuit,
                    ValidationKind::ResetNotConfirmed => ErrorCode::ResetNotConfirmed,
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::SnapshotIo => AppError::snapshot(ErrorCode::SnapshotIo, detail),
                InfraErrorKind::DataCorruption => {
                    AppError::snapshot(ErrorCode::DataCorruption, detail)
                }
                InfraErrorKind::Other(_) => AppError::internal(detail),
            },
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::snapshot(ErrorCode::SnapshotIo, format!("io error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::snapshot(ErrorCode::DataCorruption, format!("json error: {e}"))
    }
}
