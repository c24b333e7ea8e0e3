//! Pipeline orchestration
//!
//! source text → parser → converter → flattener, in one synchronous call.

mod parse_code;
mod result;

pub use parse_code::{count_lines, parse_code, parse_code_using, parse_code_with, parse_file};
pub use result::ParseResult;
