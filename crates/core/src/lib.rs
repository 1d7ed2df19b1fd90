//! `roster-core` - transport-independent failure model and classification.
//!
//! This crate is the terminal sink for errors on the request path: every
//! failure a request can produce is represented as a tagged [`Failure`]
//! and classified into the wire-level [`ApiError`] contract. Nothing in
//! here knows about HTTP frameworks or storage.

pub mod api_error;
pub mod classify;
pub mod failure;
pub mod id;

pub use api_error::ApiError;
pub use classify::{classify, DiagnosticSink, TracingSink};
pub use failure::{Failure, ValidationErrors};
pub use id::UserId;
