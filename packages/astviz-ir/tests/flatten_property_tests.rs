//! Property-based tests for parse_code and the flattened views
//!
//! Randomly generated Python must always give a well-formed tree: one link
//! per non-root node, a hierarchy that can be rebuilt from nodes and links,
//! and the same ids on every parse.

mod common;

use astviz_ir::{count_lines, parse_code};
use common::*;
use proptest::prelude::*;

const RESERVED: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "case", "class", "continue", "def", "del",
    "elif", "else", "except", "exec", "finally", "for", "from", "global", "if", "import", "in",
    "is", "lambda", "match", "nonlocal", "not", "or", "pass", "print", "raise", "return", "try",
    "type", "while", "with", "yield",
];

// Strategy for generating identifiers that are never keywords
fn python_identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,12}".prop_filter("not a keyword", |s| !RESERVED.contains(&s.as_str()))
}

fn python_operand() -> impl Strategy<Value = String> {
    prop_oneof![python_identifier(), (0..10_000i64).prop_map(|n| n.to_string()),]
}

fn python_expression() -> impl Strategy<Value = String> {
    (
        python_operand(),
        prop::sample::select(vec!["+", "-", "*", "%", "<", "==", "and"]),
        python_operand(),
    )
        .prop_map(|(left, op, right)| format!("{left} {op} {right}"))
}

fn python_assignment() -> impl Strategy<Value = String> {
    (python_identifier(), python_expression()).prop_map(|(name, expr)| format!("{name} = {expr}"))
}

fn python_function() -> impl Strategy<Value = String> {
    (python_identifier(), python_identifier(), python_expression())
        .prop_map(|(name, arg, expr)| format!("def {name}({arg}):\n    return {expr}"))
}

fn python_if() -> impl Strategy<Value = String> {
    (python_expression(), python_assignment())
        .prop_map(|(cond, body)| format!("if {cond}:\n    {body}\nelse:\n    pass"))
}

fn python_call() -> impl Strategy<Value = String> {
    (python_identifier(), prop::collection::vec(python_operand(), 0..4))
        .prop_map(|(name, args)| format!("{name}({})", args.join(", ")))
}

fn python_source() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            python_assignment(),
            python_function(),
            python_if(),
            python_call(),
        ],
        1..8,
    )
    .prop_map(|statements| statements.join("\n") + "\n")
}

proptest! {
    /// Property: nodes and links describe a tree rooted at node 0
    #[test]
    fn prop_flattened_is_tree_shaped(source in python_source()) {
        let result = parse_code(&source);
        prop_assert!(result.success, "{:?} for {:?}", result.error, source);

        let flat = flat_tree(&result);
        assert_tree_shaped(flat);
        assert_level_order(flat);
        prop_assert_eq!(flat.nodes[0].id, 0);
    }

    /// Property: the hierarchy is recoverable from nodes and links alone
    #[test]
    fn prop_hierarchy_rebuilds_from_links(source in python_source()) {
        let result = parse_code(&source);
        let flat = flat_tree(&result);
        let rebuilt = flat.to_hierarchy();
        prop_assert_eq!(rebuilt.as_ref(), Some(&flat.hierarchy));
    }

    /// Property: the same source always gets the same ids
    #[test]
    fn prop_ids_are_deterministic(source in python_source()) {
        let first = parse_code(&source);
        let second = parse_code(&source);
        prop_assert_eq!(first, second);
    }

    /// Property: parse_code never panics and always counts lines
    #[test]
    fn prop_arbitrary_text_never_panics(source in "(?s).{0,200}") {
        let result = parse_code(&source);
        prop_assert_eq!(result.lines, count_lines(&source));
        prop_assert_eq!(result.success, result.error.is_none());
        prop_assert_eq!(result.success, result.tree.is_some());
    }
}
