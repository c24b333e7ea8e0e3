//! Conversion Feature
//!
//! Raw syntax tree → converted tree with pre-order ids, scalar attributes
//! and field-tagged children.
//!
//! ## Structure
//! - `domain/` - ConvertedNode, ChildEdge, ValueLeaf
//! - `application/` - TreeConverter

pub mod application;
pub mod domain;

pub use application::TreeConverter;
pub use domain::{ChildEdge, Converted, ConvertedNode, ValueLeaf};
