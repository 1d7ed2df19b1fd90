//! Failure model: the tagged representation of every error condition.

use std::collections::BTreeMap;

use thiserror::Error;

/// Field-level validation messages: field name -> ordered violations.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// An error condition on the request path, tagged with its kind at the
/// failure site.
///
/// Collaborators decide the kind once, when they construct the value;
/// wrapped causes are flattened here and never inspected again. The
/// classifier consumes a `Failure` without unwrapping anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Input failed validation; carries the accumulated field violations.
    #[error("{message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },

    /// A record or route does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The route exists, but not for the requested HTTP method.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// The caller is not authenticated.
    #[error("{0}")]
    Unauthenticated(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// Generic HTTP-layer error carrying its original status as a hint.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Anything unrecognized. `detail` holds a pre-rendered source chain
    /// for diagnostics; it never reaches the wire.
    #[error("{message}")]
    Unexpected {
        message: String,
        detail: Option<String>,
    },
}

impl Failure {
    /// Validation failure with no top-level message (the classifier
    /// supplies the default).
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation {
            message: String::new(),
            errors,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Generic HTTP-layer failure with an explicit 400 hint.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Http {
            status: 400,
            message: message.into(),
        }
    }

    /// Generic HTTP-layer failure carrying an arbitrary status hint.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
            detail: None,
        }
    }

    /// Construction-tag name, used in diagnostic records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::NotFound(_) => "not_found",
            Self::MethodNotAllowed(_) => "method_not_allowed",
            Self::Unauthenticated(_) => "unauthenticated",
            Self::Forbidden(_) => "forbidden",
            Self::Http { .. } => "http",
            Self::Unexpected { .. } => "unexpected",
        }
    }

    /// Human-readable message; may be empty.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Http { message, .. }
            | Self::Unexpected { message, .. } => message,
            Self::NotFound(message)
            | Self::MethodNotAllowed(message)
            | Self::Unauthenticated(message)
            | Self::Forbidden(message) => message,
        }
    }

    /// Pre-rendered diagnostic detail, if any was captured at construction.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unexpected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Failure {
    /// Catch-all conversion: flatten an arbitrary error into `Unexpected`,
    /// keeping the rendered chain (and backtrace, when captured) as the
    /// diagnostic detail.
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected {
            message: err.to_string(),
            detail: Some(format!("{err:?}")),
        }
    }
}
