//! Wire-level error contract.

use serde::{Deserialize, Serialize};

use crate::failure::ValidationErrors;

/// The JSON error body returned for every failed API request, plus the
/// status code the transport layer attaches.
///
/// `errors` is omitted from the serialized form entirely when absent
/// (never `null`, never `{}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}
