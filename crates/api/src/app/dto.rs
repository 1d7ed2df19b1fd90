use roster_users::User;

// -------------------------
// JSON mapping helpers
// -------------------------

// The request side deserializes straight into `UserDraft`: its fields are
// all optional by design, so it already is the wire payload shape.

pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id.to_string(),
        "name": user.name,
        "email": user.email,
        "created_at": user.created_at.to_rfc3339(),
        "updated_at": user.updated_at.to_rfc3339(),
    })
}
