//! Error types for the NBA data CLI.
//!
//! Every failure crossing a fetch-operation boundary is an [`NbaError`],
//! and [`NbaError::kind`] maps each one into the closed [`ErrorKind`] set
//! the retry layer makes decisions with. Classification is total: anything
//! the classifier does not recognize lands in [`ErrorKind::Unexpected`]
//! and is never retried.

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("Invalid value for '{parameter_name}': '{parameter_value}'. Expected: {expected}")]
    Validation {
        parameter_name: String,
        parameter_value: String,
        expected: String,
    },

    #[error("Player not found: '{player_id}'")]
    PlayerNotFound { player_id: String },

    #[error("Team not found: '{team_id}'")]
    TeamNotFound { team_id: String },

    #[error("Game not found: '{game_id}'")]
    GameNotFound { game_id: String },

    #[error("API request timed out after {timeout_seconds}s{}", endpoint_suffix(.endpoint))]
    Timeout {
        timeout_seconds: u64,
        endpoint: Option<String>,
    },

    #[error("API rate limit exceeded{}{}", retry_after_suffix(.retry_after), endpoint_suffix(.endpoint))]
    RateLimited {
        retry_after: Option<u64>,
        endpoint: Option<String>,
    },

    #[error("{message}{}{}", status_suffix(.status), endpoint_suffix(.endpoint))]
    Api {
        status: Option<u16>,
        endpoint: Option<String>,
        message: String,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected error: {message}")]
    Unexpected { message: String },
}

fn endpoint_suffix(endpoint: &Option<String>) -> String {
    match endpoint {
        Some(e) => format!(" [endpoint: {e}]"),
        None => String::new(),
    }
}

fn retry_after_suffix(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(s) => format!(" (retry after {s}s)"),
        None => String::new(),
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(s) => format!(" (status: {s})"),
        None => String::new(),
    }
}

/// The closed classification set the retry layer works with.
///
/// Transient kinds may be retried; terminal kinds may not. `Validation`
/// and `EntityNotFound` are additionally fatal: they represent caller
/// errors and always propagate, bypassing any fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    EntityNotFound,
    Timeout,
    RateLimited,
    TransientApi,
    PermanentApi,
    Unexpected,
}

impl ErrorKind {
    /// A failure plausibly resolved by waiting and retrying.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout | ErrorKind::RateLimited | ErrorKind::TransientApi
        )
    }

    /// A caller error that must propagate regardless of fallback policy.
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::EntityNotFound)
    }
}

/// Status codes worth retrying: 429 plus the 5xx range.
fn status_is_transient(status: u16) -> bool {
    status == 429 || (500..=599).contains(&status)
}

impl NbaError {
    /// Total classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NbaError::Validation { .. } => ErrorKind::Validation,
            NbaError::PlayerNotFound { .. }
            | NbaError::TeamNotFound { .. }
            | NbaError::GameNotFound { .. } => ErrorKind::EntityNotFound,
            NbaError::Timeout { .. } => ErrorKind::Timeout,
            NbaError::RateLimited { .. } => ErrorKind::RateLimited,
            NbaError::Api {
                status: Some(status),
                ..
            } if status_is_transient(*status) => ErrorKind::TransientApi,
            NbaError::Api { .. } => ErrorKind::PermanentApi,
            NbaError::Json(_) | NbaError::Io(_) | NbaError::Csv(_) | NbaError::Unexpected { .. } => {
                ErrorKind::Unexpected
            }
        }
    }

    /// Server-supplied wait hint, used as a floor on the next backoff delay.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            NbaError::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Entity category for the not-found specializations.
    pub fn entity_type(&self) -> Option<&'static str> {
        match self {
            NbaError::PlayerNotFound { .. } => Some("player"),
            NbaError::TeamNotFound { .. } => Some("team"),
            NbaError::GameNotFound { .. } => Some("game"),
            _ => None,
        }
    }

    /// The identifier that failed to resolve, for the not-found specializations.
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            NbaError::PlayerNotFound { player_id } => Some(player_id),
            NbaError::TeamNotFound { team_id } => Some(team_id),
            NbaError::GameNotFound { game_id } => Some(game_id),
            _ => None,
        }
    }

    /// Shorthand used by the validators.
    pub fn validation(parameter_name: &str, parameter_value: impl ToString, expected: &str) -> Self {
        NbaError::Validation {
            parameter_name: parameter_name.to_string(),
            parameter_value: parameter_value.to_string(),
            expected: expected.to_string(),
        }
    }
}

impl From<anyhow::Error> for NbaError {
    fn from(err: anyhow::Error) -> Self {
        NbaError::Unexpected {
            message: err.to_string(),
        }
    }
}
