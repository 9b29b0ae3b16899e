//! In-memory user repository.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use common::{AppError, AppResult};
use domain::User;

use super::UserRepository;

/// `UserRepository` backed by a map keyed on user id.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `users`; later duplicates overwrite earlier ones
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id(), u)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<i64, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::storage("user store lock poisoned"))
    }
}

impl UserRepository for InMemoryUserStore {
    fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = self.read()?.get(&id).cloned();
        debug!(id, found = user.is_some(), "User lookup");
        Ok(user)
    }

    fn save(&self, user: User) -> AppResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::storage("user store lock poisoned"))?;

        debug!(user = %user, "Saving user");
        users.insert(user.id(), user);
        Ok(())
    }
}
