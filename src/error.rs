//! Console Errors
//!
//! One error type for every failure a page can show: client-side
//! validation, transport, protocol and decoding problems.

use thiserror::Error;

/// Shown when the server cannot be reached or answered garbage
pub const CONNECTION_FAILED: &str = "Could not reach the server. Please try again.";

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    /// Rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status; `message` is the server's own text when it sent one
    #[error("{message}")]
    Http { status: u16, message: String },

    /// An API path answered with something that is not JSON
    #[error("Server returned non-JSON for {path} (status {status})")]
    Protocol { path: String, status: u16 },

    /// JSON that does not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ConsoleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Http { status, .. } | ConsoleError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for toasts and inline messages
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Validation(msg) => msg.clone(),
            ConsoleError::Http { message, .. } => message.clone(),
            ConsoleError::Network(_) | ConsoleError::Protocol { .. } | ConsoleError::Decode(_) => {
                CONNECTION_FAILED.to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::Decode(e.to_string())
    }
}
