use axum::http::StatusCode;

/// Liveness probe. Mounted outside the `/api` namespace, so it never
/// speaks the JSON error contract.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
