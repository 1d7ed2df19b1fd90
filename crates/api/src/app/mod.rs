//! HTTP API application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: service construction and shared handles
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: JSON mapping helpers
//! - `errors.rs`: failure classification at the HTTP boundary

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::context::Locale;
use crate::middleware::{self, LocaleState};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Everything nested under `/api` answers in the JSON error contract and
/// carries a negotiated locale. Anything else (`/health`, unmatched root
/// paths) renders plain HTTP.
pub fn build_app(default_locale: Locale) -> Router {
    let services = Arc::new(services::build_services());
    let locale_state = LocaleState {
        default: default_locale,
    };

    // The layer wraps the fallback too, so even a JSON 404 carries the
    // negotiated locale.
    let api = routes::router().fallback(routes::not_found).layer(
        ServiceBuilder::new()
            .layer(Extension(services))
            .layer(axum::middleware::from_fn_with_state(
                locale_state,
                middleware::locale_middleware,
            )),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
}
