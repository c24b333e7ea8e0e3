//! Parser port (interface)
//!
//! Defines the contract for turning source text into a raw syntax tree.

use crate::errors::Result;
use crate::features::parsing::domain::RawNode;

/// Parser trait - abstraction over the native parser
pub trait SourceParser: Send + Sync {
    /// Parse source code into a raw tree.
    ///
    /// Malformed input yields `AstvizError::Syntax`; any other failure is
    /// `AstvizError::Parse` or `AstvizError::Schema`.
    fn parse(&self, source: &str) -> Result<RawNode>;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
