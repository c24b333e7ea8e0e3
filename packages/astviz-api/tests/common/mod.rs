//! Common test utilities for astviz-api

#![allow(dead_code)]

use astviz_api::{ApiRequest, ApiResponse, Router};
use serde_json::Value;

/// POST a JSON body to /api/parse with the default configuration
pub fn post_parse(body: Value) -> ApiResponse {
    Router::default().handle(&ApiRequest::post("/api/parse", body))
}

/// GET a path with the default configuration
pub fn get(path: &str) -> ApiResponse {
    Router::default().handle(&ApiRequest::get(path))
}

pub fn error_message(response: &ApiResponse) -> &str {
    response.body["error"].as_str().unwrap_or_default()
}
