//! Error types for astviz-ir
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for astviz-ir operations
#[derive(Debug, Error)]
pub enum AstvizError {
    /// Malformed source, reported with the 1-based line of the first error
    #[error("Syntax Error at line {line}: {message}")]
    Syntax { line: u32, message: String },

    /// Parser failure unrelated to the input's syntax
    #[error("{0}")]
    Parse(String),

    /// Grammar schema could not be loaded
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AstvizError {
    /// Create a syntax error
    pub fn syntax(line: u32, message: impl Into<String>) -> Self {
        AstvizError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        AstvizError::Parse(msg.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, AstvizError::Syntax { .. })
    }
}

/// Result type alias for astviz operations
pub type Result<T> = std::result::Result<T, AstvizError>;
