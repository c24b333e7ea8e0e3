//! POST /api/parse
//!
//! Checks run in a fixed order: `code` present, language supported, code
//! not blank. Only then is the source parsed.

use astviz_ir::config::ApiConfig;
use astviz_ir::{parse_code_with, VisualizerConfig};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

/// Fields pulled out of the request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest<'a> {
    pub code: &'a str,
    pub language: String,
}

impl<'a> ParseRequest<'a> {
    /// Validate a request body against the API settings
    pub fn from_body(body: Option<&'a Value>, config: &ApiConfig) -> ApiResult<Self> {
        let fields = body
            .and_then(Value::as_object)
            .ok_or(ApiError::MissingCode)?;
        let code = fields.get("code").ok_or(ApiError::MissingCode)?;

        let language = match fields.get("language") {
            None | Some(Value::Null) => config.default_language.to_lowercase(),
            Some(Value::String(s)) => s.to_lowercase(),
            Some(other) => {
                return Err(ApiError::internal(format!(
                    "'language' must be a string, got {}",
                    other
                )))
            }
        };
        if !ApiConfig::is_supported_language(&language) {
            return Err(ApiError::UnsupportedLanguage(language));
        }

        let code = code.as_str().ok_or_else(|| {
            ApiError::internal(format!("'code' must be a string, got {}", code))
        })?;
        if code.trim().is_empty() {
            return Err(ApiError::EmptyCode);
        }

        Ok(Self { code, language })
    }
}

pub fn handle(config: &VisualizerConfig, body: Option<&Value>) -> ApiResult<ApiResponse> {
    let request = ParseRequest::from_body(body, &config.api)?;
    debug!(
        "parsing {} bytes of {}",
        request.code.len(),
        request.language
    );

    let result = parse_code_with(request.code, &config.converter);
    ApiResponse::json(&result)
}
