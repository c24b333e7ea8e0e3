//! Transport-neutral response

use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// 200 with an already-built body
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// 200 with any serializable body
    pub fn json<T: Serialize>(value: &T) -> ApiResult<Self> {
        serde_json::to_value(value)
            .map(Self::ok)
            .map_err(|e| ApiError::internal(format!("response serialization failed: {}", e)))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status(),
            body: err.body(),
        }
    }
}
