//! Flattening application layer

mod flattener;

pub use flattener::{flatten, flatten_tree};
