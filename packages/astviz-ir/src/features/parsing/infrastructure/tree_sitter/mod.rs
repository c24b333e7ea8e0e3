//! Tree-sitter based parser implementation

mod lowering;
mod parser;
mod schema;

pub use lowering::{
    Lowering, LoweringOptions, COMMENTS_FIELD, MAX_NESTING_DEPTH, TEXT_FIELD, UNNAMED_FIELD,
};
pub use parser::TreeSitterParser;
pub use schema::{FieldDescriptor, FieldShape, GrammarSchema, NodeSchema};
