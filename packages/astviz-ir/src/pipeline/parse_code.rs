//! parse_code: the single entry point used by the API layer

use std::path::Path;
use tracing::debug;

use super::result::ParseResult;
use crate::config::ConverterConfig;
use crate::errors::{AstvizError, Result};
use crate::features::conversion::TreeConverter;
use crate::features::flattening::flatten;
use crate::features::parsing::infrastructure::tree_sitter::LoweringOptions;
use crate::features::parsing::{SourceParser, TreeSitterParser};

/// Number of `\n`-separated segments; `""` counts as one line
pub fn count_lines(source: &str) -> usize {
    source.split('\n').count()
}

/// Parse Python source with the default converter settings
pub fn parse_code(source: &str) -> ParseResult {
    parse_code_with(source, &ConverterConfig::default())
}

/// Parse Python source with explicit converter settings
pub fn parse_code_with(source: &str, config: &ConverterConfig) -> ParseResult {
    let parser = TreeSitterParser::python().with_options(LoweringOptions::from(config));
    parse_code_using(&parser, source)
}

/// Read a source file and parse it.
///
/// Only reading the file can fail; parse failures are in the result.
pub fn parse_file(path: impl AsRef<Path>, config: &ConverterConfig) -> Result<ParseResult> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse_code_with(&source, config))
}

/// Parse with any `SourceParser`, then convert and flatten.
///
/// Each call owns its converter, so ids start at 0 every time.
pub fn parse_code_using(parser: &dyn SourceParser, source: &str) -> ParseResult {
    let lines = count_lines(source);

    let raw = match parser.parse(source) {
        Ok(raw) => raw,
        Err(err @ AstvizError::Syntax { .. }) => {
            return ParseResult::failure(err.to_string(), lines);
        }
        Err(err) => {
            return ParseResult::failure(format!("Parse Error: {}", err), lines);
        }
    };

    let mut converter = TreeConverter::new();
    let tree = converter.convert_node(&raw);
    debug!(
        "converted {} source into {} nodes",
        parser.language_name(),
        converter.assigned()
    );

    let flattened = flatten(Some(&tree));
    ParseResult::success(tree, flattened, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::RawNode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct FailingParser(fn() -> AstvizError);

    impl SourceParser for FailingParser {
        fn parse(&self, _source: &str) -> Result<RawNode> {
            Err((self.0)())
        }

        fn language_name(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb\n"), 3);
    }

    #[test]
    fn test_success_populates_tree_and_flattened() {
        let result = parse_code("x = 1\n");
        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.lines, 2);

        let tree = result.tree.as_ref().unwrap();
        assert_eq!(tree.id, 0);
        assert_eq!(tree.name, "module");

        let flat = result.flattened.as_ref().and_then(|f| f.as_tree()).unwrap();
        assert_eq!(flat.nodes.len(), tree.node_count());
    }

    #[test]
    fn test_syntax_failure() {
        let result = parse_code("def f(");
        assert!(!result.success);
        assert!(result.tree.is_none());
        assert!(result.flattened.is_none());
        assert_eq!(result.lines, 1);
        let error = result.error.unwrap();
        assert!(error.starts_with("Syntax Error at line 1: "), "{}", error);
    }

    #[test]
    fn test_unexpected_failure_is_generic_parse_error() {
        let parser = FailingParser(|| AstvizError::parse("Failed to parse source code"));
        let result = parse_code_using(&parser, "a\nb");
        assert!(!result.success);
        assert_eq!(result.lines, 2);
        assert_eq!(
            result.error.as_deref(),
            Some("Parse Error: Failed to parse source code")
        );
        assert!(result.flattened.is_none());
    }

    #[test]
    fn test_syntax_error_from_any_parser_keeps_line() {
        let parser = FailingParser(|| AstvizError::syntax(7, "expected ':'"));
        let result = parse_code_using(&parser, "");
        assert_eq!(
            result.error.as_deref(),
            Some("Syntax Error at line 7: expected ':'")
        );
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "def f(a):\n    return a\n").unwrap();

        let result = parse_file(file.path(), &ConverterConfig::default()).unwrap();
        assert!(result.success);
        assert_eq!(result.lines, 3);
    }

    #[test]
    fn test_parse_file_missing_is_io_error() {
        let err = parse_file("/nonexistent/script.py", &ConverterConfig::default()).unwrap_err();
        assert!(matches!(err, AstvizError::Io(_)));
    }

    #[test]
    fn test_ids_restart_for_every_call() {
        let first = parse_code("def f(a):\n    return a\n");
        let second = parse_code("def f(a):\n    return a\n");
        assert_eq!(first.tree, second.tree);
    }

    #[test]
    fn test_config_positions_reach_attributes() {
        let config = ConverterConfig {
            include_positions: true,
            ..ConverterConfig::default()
        };
        let result = parse_code_with("x\n", &config);
        let tree = result.tree.unwrap();
        assert!(tree.attributes.contains_key("start_line"));
    }
}
