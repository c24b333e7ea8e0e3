//! Request router
//!
//! Dispatches on method and path, and turns every handler error into its
//! status code and `{"error": ...}` body. `handle` never fails.

use astviz_ir::VisualizerConfig;
use tracing::{debug, error};

use crate::error::{ApiError, ApiResult};
use crate::handlers;
use crate::request::{ApiRequest, Method};
use crate::response::ApiResponse;

pub const PARSE_ROUTE: &str = "/api/parse";
pub const EXAMPLES_ROUTE: &str = "/api/examples";
pub const HEALTH_ROUTE: &str = "/api/health";

/// Routes requests to handlers with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: VisualizerConfig,
}

impl Router {
    pub fn new(config: VisualizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Answer one request
    pub fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let response = match self.dispatch(request) {
            Ok(response) => response,
            Err(err) => {
                if let ApiError::Internal(detail) = &err {
                    error!("{} {} failed: {}", request.method, request.path, detail);
                }
                ApiResponse::from(err)
            }
        };

        debug!("{} {} -> {}", request.method, request.path, response.status);
        response
    }

    fn dispatch(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        match (request.method, request.route()) {
            (Method::Post, PARSE_ROUTE) => handlers::parse::handle(&self.config, request.body.as_ref()),
            (Method::Get, EXAMPLES_ROUTE) if self.config.api.examples_enabled => {
                Ok(handlers::examples::handle())
            }
            (Method::Get, HEALTH_ROUTE) => Ok(handlers::health::handle()),
            _ => Err(ApiError::NotFound),
        }
    }
}
