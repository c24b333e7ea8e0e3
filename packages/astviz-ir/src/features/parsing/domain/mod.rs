//! Parsing domain models

mod raw_node;
mod syntax_error;

pub use raw_node::{RawField, RawNode, RawValue};
pub use syntax_error::SyntaxError;
