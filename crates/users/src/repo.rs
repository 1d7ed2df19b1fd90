//! User storage behind a narrow interface.

use std::collections::HashMap;
use std::sync::RwLock;

use roster_core::UserId;

use crate::user::User;

/// Keyed user storage. Values are cloned out; callers never hold locks.
pub trait UserRepository: Send + Sync {
    fn get(&self, id: UserId) -> Option<User>;
    /// All users, ordered by id (creation order for v7 ids).
    fn list(&self) -> Vec<User>;
    fn upsert(&self, user: User);
    /// Returns whether a record was removed.
    fn remove(&self, id: UserId) -> bool;
    /// Case-insensitive email lookup for uniqueness checks; `exclude`
    /// skips one record (the user being updated).
    fn email_taken(&self, email: &str, exclude: Option<UserId>) -> bool;
}

/// In-memory store for tests/dev.
///
/// Lock poisoning degrades instead of panicking: reads behave as absent,
/// writes drop the operation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get(&self, id: UserId) -> Option<User> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn list(&self) -> Vec<User> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut users: Vec<User> = map.values().cloned().collect();
        users.sort_by_key(|user| user.id);
        users
    }

    fn upsert(&self, user: User) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(user.id, user);
        }
    }

    fn remove(&self, id: UserId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(&id).is_some(),
            Err(_) => false,
        }
    }

    fn email_taken(&self, email: &str, exclude: Option<UserId>) -> bool {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return false,
        };

        map.values()
            .any(|user| user.email.eq_ignore_ascii_case(email) && Some(user.id) != exclude)
    }
}
