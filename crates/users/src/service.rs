//! Use-case layer: validation plus storage, reported as [`Failure`]s.

use std::sync::Arc;

use chrono::Utc;

use roster_core::{Failure, UserId, ValidationErrors};

use crate::repo::UserRepository;
use crate::user::{validate_draft, DraftMode, User, UserDraft, ValidatedDraft};

/// CRUD over users. Every fallible operation reports a tagged [`Failure`]
/// so callers classify instead of branching on error shapes.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Result<Vec<User>, Failure> {
        Ok(self.repo.list())
    }

    pub fn find(&self, id: UserId) -> Result<User, Failure> {
        self.repo
            .get(id)
            .ok_or_else(|| Failure::not_found("User not found"))
    }

    pub fn create(&self, draft: &UserDraft) -> Result<User, Failure> {
        let fields = self.validate(draft, DraftMode::Create, None)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: fields.name,
            email: fields.email,
            created_at: now,
            updated_at: now,
        };
        self.repo.upsert(user.clone());
        Ok(user)
    }

    /// Validation runs before the lookup, so a bad payload against a
    /// missing user still reports the payload's violations.
    pub fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, Failure> {
        let fields = self.validate(draft, DraftMode::Update, Some(id))?;

        let mut user = self.find(id)?;
        user.name = fields.name;
        user.email = fields.email;
        user.updated_at = Utc::now();
        self.repo.upsert(user.clone());
        Ok(user)
    }

    pub fn delete(&self, id: UserId) -> Result<(), Failure> {
        self.find(id)?;
        self.repo.remove(id);
        Ok(())
    }

    /// Field rules plus repository-backed email uniqueness. Uniqueness
    /// applies whenever the email itself passed its field rules, even if
    /// another field failed, and merges into the same map.
    fn validate(
        &self,
        draft: &UserDraft,
        mode: DraftMode,
        exclude: Option<UserId>,
    ) -> Result<ValidatedDraft, Failure> {
        let (mut errors, fields) = match validate_draft(draft, mode) {
            Ok(fields) => (ValidationErrors::new(), Some(fields)),
            Err(errors) => (errors, None),
        };

        if !errors.contains_key("email") {
            let email = draft.email.as_deref().map(str::trim).unwrap_or_default();
            if self.repo.email_taken(email, exclude) {
                errors
                    .entry("email".to_string())
                    .or_default()
                    .push("has already been taken".to_string());
            }
        }

        match fields {
            Some(fields) if errors.is_empty() => Ok(fields),
            _ => Err(Failure::validation(errors)),
        }
    }
}
