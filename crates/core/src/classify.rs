//! Failure classification: the single mapping from failures to the wire
//! error contract.

use crate::api_error::ApiError;
use crate::failure::Failure;

/// Receives a diagnostic record for every failure the classifier resolves
/// to the catch-all kind.
///
/// Injected instead of reaching a process-wide logger so tests can observe
/// the side effect deterministically.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, failure: &Failure);
}

/// Production sink: one structured error event per unexpected failure,
/// carrying the construction-tag name, the message, and the captured
/// detail (or the failure's debug rendering when none was captured).
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, failure: &Failure) {
        let detail = match failure.detail() {
            Some(detail) => detail.to_string(),
            None => format!("{failure:?}"),
        };
        tracing::error!(
            kind = failure.name(),
            detail = %detail,
            "unexpected failure: {}",
            failure.message()
        );
    }
}

/// Classify a failure into the wire error contract.
///
/// Total over the failure space: every input yields exactly one
/// [`ApiError`], with the catch-all arm mapping to 500. Arms are checked
/// in precedence order; within the HTTP-hint kind only an exact 400
/// passes through, every other hinted status is swallowed by the
/// catch-all. Only the catch-all arm emits a diagnostic record -
/// recognized kinds are normal operation, not incidents.
pub fn classify(failure: &Failure, diagnostics: &dyn DiagnosticSink) -> ApiError {
    match failure {
        Failure::Validation { message, errors } => {
            ApiError::new(resolve(message, "Validation Failed"), 422).with_errors(errors.clone())
        }
        Failure::NotFound(message) => ApiError::new(resolve(message, "Resource Not Found"), 404),
        Failure::MethodNotAllowed(message) => {
            ApiError::new(resolve(message, "Method Not Allowed"), 405)
        }
        Failure::Unauthenticated(message) => ApiError::new(resolve(message, "Unauthorized"), 401),
        Failure::Forbidden(message) => ApiError::new(resolve(message, "Forbidden"), 403),
        Failure::Http {
            status: 400,
            message,
        } => ApiError::new(resolve(message, "Bad Request"), 400),
        other => {
            diagnostics.emit(other);
            ApiError::new(resolve(other.message(), "Internal server error"), 500)
        }
    }
}

/// Uniform message resolution: the failure's own message verbatim when
/// non-empty, otherwise the kind's default.
fn resolve(message: &str, default: &str) -> String {
    if message.is_empty() {
        default.to_string()
    } else {
        message.to_string()
    }
}
