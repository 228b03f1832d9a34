//! Action Errors
//!
//! Failure taxonomy surfaced to the presentation layer. Every variant is
//! terminal for the attempt that produced it.

use thiserror::Error;

pub type ActionResult<T> = Result<T, ActionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Required input missing; caught before dispatch
    #[error("please fill in: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// No session, or the server rejected the credential
    #[error("{0}")]
    Unauthorized(String),

    /// Signed in, but not the owner of the target
    #[error("{0}")]
    Forbidden(String),

    /// Target no longer exists
    #[error("{0}")]
    NotFound(String),

    /// Request never got a response
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but was not a success
    #[error("{message}")]
    Server { status: Option<u16>, message: String },
}

/// Stable kind names for display and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Network,
    Server,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation-error",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not-found",
            ErrorKind::Network => "network-error",
            ErrorKind::Server => "server-error",
        }
    }
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::Validation { .. } => ErrorKind::Validation,
            ActionError::Unauthorized(_) => ErrorKind::Unauthorized,
            ActionError::Forbidden(_) => ErrorKind::Forbidden,
            ActionError::NotFound(_) => ErrorKind::NotFound,
            ActionError::Network(_) => ErrorKind::Network,
            ActionError::Server { .. } => ErrorKind::Server,
        }
    }

    pub fn not_signed_in() -> Self {
        ActionError::Unauthorized("sign in to continue".to_string())
    }

    pub fn server(status: Option<u16>, message: impl Into<String>) -> Self {
        ActionError::Server {
            status,
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status (and the server's message, if any)
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ActionError::Unauthorized(
                message.unwrap_or_else(|| "your session has expired, please sign in again".to_string()),
            ),
            403 => ActionError::Forbidden(
                message.unwrap_or_else(|| "you can only change your own posts".to_string()),
            ),
            404 => ActionError::NotFound(
                message.unwrap_or_else(|| "this item no longer exists".to_string()),
            ),
            _ => ActionError::server(
                Some(status),
                message.unwrap_or_else(|| format!("request failed with status {}", status)),
            ),
        }
    }

    /// Whether re-triggering the same action can reasonably succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network | ErrorKind::Server)
    }
}
