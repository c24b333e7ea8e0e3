//! Syntax error located in source

use crate::errors::AstvizError;
use crate::shared::models::Span;

/// First syntax error found in a parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// 1-based line the error starts on
    pub fn line(&self) -> u32 {
        self.span.start_line
    }
}

impl From<SyntaxError> for AstvizError {
    fn from(err: SyntaxError) -> Self {
        AstvizError::syntax(err.line(), err.message)
    }
}
