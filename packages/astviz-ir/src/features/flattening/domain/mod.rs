//! Flattening domain models

mod flat;

pub use flat::{EmptyTree, FlatNode, FlatTree, FlattenOutput, HierarchyNode, Link};
