//! Error types for teamcal.

use chrono::NaiveDate;
use thiserror::Error;

use crate::month::Month;

/// Errors that can occur in teamcal operations.
#[derive(Error, Debug)]
pub enum TeamCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Remote store returned HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Remote subscription closed: {0}")]
    SubscriptionClosed(String),

    #[error("Cannot navigate to {0}: it is before the current month")]
    PastMonth(Month),

    #[error("Cannot select {0}: it is in the past")]
    PastDate(NaiveDate),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("No selections to export.")]
    NothingToExport,
}

impl From<serde_json::Error> for TeamCalError {
    fn from(e: serde_json::Error) -> Self {
        TeamCalError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for TeamCalError {
    fn from(e: reqwest::Error) -> Self {
        TeamCalError::Remote(e.to_string())
    }
}

impl TeamCalError {
    /// Navigation guard rejections are shown to the user as warnings and
    /// leave state untouched.
    pub fn is_navigation_guard(&self) -> bool {
        matches!(self, TeamCalError::PastMonth(_) | TeamCalError::PastDate(_))
    }
}

/// Result type alias for teamcal operations.
pub type TeamCalResult<T> = Result<T, TeamCalError>;
