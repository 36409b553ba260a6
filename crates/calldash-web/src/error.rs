//! Error types for backend calls and dashboard actions

use thiserror::Error;

/// Result type alias for backend calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by a [`CallBackend`](crate::backend::CallBackend)
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request to call backend failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Call backend returned {status}{}", message_suffix(.message))]
    Status {
        /// HTTP status code
        status: u16,
        /// The `error` field of the response body, if any
        message: Option<String>,
    },

    /// The response body did not have the expected shape
    #[error("Failed to decode {what}: {message}")]
    Decode {
        /// What was being decoded
        what: &'static str,
        /// Decoder message
        message: String,
    },
}

impl ClientError {
    /// Create a status error
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Create a decode error
    pub fn decode(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            what,
            message: err.to_string(),
        }
    }

    /// The message the backend put in its `error` field, if it sent one
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Backend message, or `fallback` when the backend gave none
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}

/// Why a user-initiated dashboard action did not go through.
///
/// `Display` is the exact text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The phone number input was empty after trimming
    #[error("{0}")]
    InvalidInput(String),

    /// An initiate request is already in flight
    #[error("A call is already being initiated")]
    Busy,

    /// The user declined the confirmation prompt
    #[error("Action canceled")]
    Declined,

    /// The backend rejected the action or could not be reached
    #[error("{0}")]
    Failed(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
