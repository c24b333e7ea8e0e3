//! Parsing Feature
//!
//! Responsible for running the native parser and lowering its tree.
//!
//! ## Structure
//! - `domain/` - RawNode, SyntaxError models
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - TreeSitterParser, grammar schema, lowering

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{RawField, RawNode, RawValue, SyntaxError};
pub use infrastructure::{FieldShape, GrammarSchema, TreeSitterParser};
pub use ports::SourceParser;
