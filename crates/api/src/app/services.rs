use std::sync::Arc;

use roster_users::{InMemoryUserRepository, UserService};

/// Shared service handles, injected into handlers as an extension.
#[derive(Clone)]
pub struct AppServices {
    users: UserService,
}

impl AppServices {
    pub fn users(&self) -> &UserService {
        &self.users
    }
}

/// Wire the service stack. Storage is in-memory behind the repository
/// trait; nothing else in the process knows that.
pub fn build_services() -> AppServices {
    let repo = Arc::new(InMemoryUserRepository::new());

    AppServices {
        users: UserService::new(repo),
    }
}
