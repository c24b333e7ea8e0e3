//! API error types
//!
//! Every failure a request can hit, with the status code and JSON body it
//! is answered with.

use serde_json::{json, Value};
use thiserror::Error;

/// Request-level failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Body missing, not a JSON object, or without `code`
    #[error("Missing 'code' field")]
    MissingCode,

    /// Holds the lowercased language name
    #[error("Language '{0}' not yet supported")]
    UnsupportedLanguage(String),

    #[error("Code cannot be empty")]
    EmptyCode,

    #[error("Endpoint not found")]
    NotFound,

    /// Handler fault. The detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }

    /// HTTP status code for this error
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingCode | ApiError::UnsupportedLanguage(_) | ApiError::EmptyCode => 400,
            ApiError::NotFound => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// `{"error": "<message>"}`
    pub fn body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;
