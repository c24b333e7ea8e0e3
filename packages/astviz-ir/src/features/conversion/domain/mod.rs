//! Conversion domain models

mod converted;

pub use converted::{ChildEdge, Converted, ConvertedNode, ValueLeaf};
