//! User entity and draft validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::{UserId, ValidationErrors};

const MAX_NAME_CHARS: usize = 255;
const MIN_PASSWORD_CHARS: usize = 8;

/// A stored user record.
///
/// The password never appears here: it is checked during validation and
/// discarded (nothing in this system authenticates against it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated input for creating or updating a user.
///
/// Every field is optional at this level so that missing input surfaces
/// as a field-level violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Which ruleset applies: creation requires a password, updates accept
/// its absence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Update,
}

/// The fields of a draft that survive validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub name: String,
    pub email: String,
}

/// Check a draft against the field rules, accumulating every violation.
///
/// Violations are grouped per field in rule order; fields are reported in
/// lexicographic order. Email uniqueness is not checked here - it needs
/// the repository and is the service's concern.
pub fn validate_draft(draft: &UserDraft, mode: DraftMode) -> Result<ValidatedDraft, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = draft.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        push(&mut errors, "name", "is required");
    } else if name.chars().count() > MAX_NAME_CHARS {
        push(&mut errors, "name", "must not exceed 255 characters");
    }

    let email = draft.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() {
        push(&mut errors, "email", "is required");
    } else if !is_email_shaped(email) {
        push(&mut errors, "email", "must be a valid email address");
    }

    match (draft.password.as_deref(), mode) {
        (None, DraftMode::Create) => push(&mut errors, "password", "is required"),
        (Some(password), _) if password.chars().count() < MIN_PASSWORD_CHARS => {
            push(&mut errors, "password", "must be at least 8 characters");
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(ValidatedDraft {
            name: name.to_string(),
            email: email.to_string(),
        })
    } else {
        Err(errors)
    }
}

fn push(errors: &mut ValidationErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Shape check only: exactly one `@` with non-empty local and domain
/// parts. Deliverability is out of scope.
fn is_email_shaped(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
