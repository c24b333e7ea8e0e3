/*
 * Astviz API - request routing for the syntax tree visualizer
 *
 * - request/response : transport-neutral request and response values
 * - router/          : method + path dispatch, error → status mapping
 * - handlers/        : parse, examples, health
 *
 * A network server only has to turn its requests into `ApiRequest` and
 * write back the `ApiResponse`.
 */

pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod router;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, Method};
pub use response::ApiResponse;
pub use router::Router;
