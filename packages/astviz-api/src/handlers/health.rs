//! GET /api/health

use serde_json::json;

use crate::response::ApiResponse;

pub const HEALTH_MESSAGE: &str = "Parser Visualizer Backend is running";

pub fn handle() -> ApiResponse {
    ApiResponse::ok(json!({
        "status": "ok",
        "message": HEALTH_MESSAGE,
    }))
}
