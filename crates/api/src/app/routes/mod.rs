use axum::Router;

use roster_core::Failure;

use crate::app::errors::ApiFailure;

pub mod system;
pub mod users;

/// Router for everything under the `/api` namespace.
pub fn router() -> Router {
    Router::new().nest("/v1/users", users::router())
}

/// Fallback for namespace paths that match nothing: a JSON 404, unlike
/// unmatched paths outside the namespace.
pub async fn not_found() -> ApiFailure {
    ApiFailure(Failure::not_found(""))
}

/// Fallback for a matched route hit with an unsupported method.
pub async fn method_not_allowed() -> ApiFailure {
    ApiFailure(Failure::method_not_allowed(""))
}
