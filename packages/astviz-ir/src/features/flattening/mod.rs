//! Flattening Feature
//!
//! Converted tree → flat node list, link list and nested hierarchy.
//!
//! ## Structure
//! - `domain/` - FlatNode, Link, HierarchyNode, FlatTree
//! - `application/` - flatten

pub mod application;
pub mod domain;

pub use application::{flatten, flatten_tree};
pub use domain::{EmptyTree, FlatNode, FlatTree, FlattenOutput, HierarchyNode, Link};
