//! Error handling for the brigade needs client

use std::fmt;
use thiserror::Error;

use crate::draft::DraftError;
use crate::validation::ValidationError;

/// Unified error type for the brigade needs client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The back-end answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The form was rejected before reaching the draft list
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Draft list contract violation
    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    /// Submission requested with nothing in the draft list
    #[error("the draft list is empty")]
    EmptyDraft,

    /// A request of the same kind is still in flight
    #[error("a request is already in flight")]
    Busy,

    /// The gateway rejected the submission or could not be reached
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new API error
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new submission error
    pub fn submission<T: fmt::Display>(msg: T) -> Self {
        Error::SubmissionFailed(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Whether the error comes from user input rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
