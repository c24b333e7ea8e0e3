//! Router integration tests
//!
//! Requests go through `Router::handle` exactly as a server would send
//! them, including raw bodies and configuration loaded from YAML.

mod common;

use astviz_api::{ApiRequest, Method, Router};
use astviz_ir::VisualizerConfig;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_object_is_missing_code() {
    let resp = post_parse(json!({}));
    assert_eq!(resp.status, 400);
    assert_eq!(resp.body, json!({"error": "Missing 'code' field"}));
}

#[test]
fn test_unparseable_body_is_missing_code() {
    let request = ApiRequest::new(Method::Post, "/api/parse").with_raw_body("not json");
    let resp = Router::default().handle(&request);
    assert_eq!(resp.status, 400);
    assert_eq!(error_message(&resp), "Missing 'code' field");
}

#[test]
fn test_ruby_is_not_supported() {
    let resp = post_parse(json!({"code": "x=1", "language": "ruby"}));
    assert_eq!(resp.status, 400);
    assert_eq!(error_message(&resp), "Language 'ruby' not yet supported");
}

#[test]
fn test_unsupported_language_is_reported_lowercased() {
    let resp = post_parse(json!({"code": "x=1", "language": "JavaScript"}));
    assert_eq!(error_message(&resp), "Language 'javascript' not yet supported");
}

#[test]
fn test_blank_code_is_rejected() {
    let resp = post_parse(json!({"code": "   \n"}));
    assert_eq!(resp.status, 400);
    assert_eq!(error_message(&resp), "Code cannot be empty");
}

#[test]
fn test_parse_hello_world() {
    let resp = post_parse(json!({"code": "print(\"Hello, World!\")", "language": "Python"}));
    assert_eq!(resp.status, 200);

    let body = &resp.body;
    assert_eq!(body["success"], true);
    assert!(body["error"].is_null());
    assert_eq!(body["lines"], 1);
    assert_eq!(body["tree"]["name"], "module");

    let flattened = &body["flattened"];
    let nodes = flattened["nodes"].as_array().unwrap();
    let links = flattened["links"].as_array().unwrap();
    assert_eq!(nodes.len(), links.len() + 1);
    assert_eq!(flattened["hierarchy"]["id"], 0);
    assert!(nodes.iter().any(|n| n["name"] == "call"));
}

#[test]
fn test_syntax_error_is_reported_in_body() {
    let resp = post_parse(json!({"code": "def f("}));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["success"], false);
    assert!(resp.body["tree"].is_null());
    assert!(resp.body["flattened"].is_null());
    let error = resp.body["error"].as_str().unwrap();
    assert!(error.starts_with("Syntax Error at line 1: "), "{}", error);
}

#[test]
fn test_examples_listing() {
    let resp = get("/api/examples");
    assert_eq!(resp.status, 200);

    let mut names: Vec<_> = resp.body.as_object().unwrap().keys().cloned().collect();
    names.sort();
    assert_eq!(
        names,
        vec!["class", "function", "hello_world", "lambda", "loop_and_condition"]
    );
    assert_eq!(resp.body["hello_world"], "print(\"Hello, World!\")");
}

#[test]
fn test_every_example_round_trips_through_parse() {
    let examples = get("/api/examples").body;
    for (name, source) in examples.as_object().unwrap() {
        let resp = post_parse(json!({"code": source}));
        assert_eq!(resp.status, 200, "{}", name);
        assert_eq!(resp.body["success"], true, "{}", name);
    }
}

#[test]
fn test_health() {
    let resp = get("/api/health");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["status"], "ok");
}

#[test]
fn test_not_found() {
    let resp = get("/api/nothing");
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body, json!({"error": "Endpoint not found"}));
}

#[test]
fn test_config_from_yaml_reaches_converter() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "version: 1\nconverter:\n  include_positions: true").unwrap();
    let config = VisualizerConfig::from_yaml(file.path()).unwrap();

    let router = Router::new(config);
    let resp = router.handle(&ApiRequest::post("/api/parse", json!({"code": "x = 1\n"})));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["tree"]["attributes"]["start_line"], 1);
}
