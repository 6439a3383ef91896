use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_STATE_FILE: &str = "judgement-game-state.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::config(format!(
                "JUDGEMENT_LOG_FORMAT must be 'text' or 'json', but got: '{other}'"
            ))),
        }
    }
}

/// Runtime settings for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub state_file: PathBuf,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup (environment, tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let state_file = lookup("JUDGEMENT_STATE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));

        // Read filter in order: JUDGEMENT_LOG -> RUST_LOG -> "warn"
        let log_filter = lookup("JUDGEMENT_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match lookup("JUDGEMENT_LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw)?,
            None => LogFormat::Text,
        };

        Ok(Self {
            state_file,
            log_filter,
            log_format,
        })
    }
}
