//! `roster-users` - the user resource: entity, validation, storage, and
//! the service the HTTP layer calls into.

pub mod repo;
pub mod service;
pub mod user;

pub use repo::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use user::{validate_draft, DraftMode, User, UserDraft, ValidatedDraft};
