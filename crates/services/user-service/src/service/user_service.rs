//! User service - Handles user-related business logic.
//!
//! Each operation makes exactly one repository call. Repository failures
//! are returned as-is; there is no retry, caching or fallback here.

use std::sync::Arc;

use tracing::instrument;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
pub trait UserService: Send + Sync {
    /// Get the name of the user with `id`, or `None` if there is no such user
    fn get_username(&self, id: i64) -> AppResult<Option<String>>;

    /// Persist `user` unchanged
    fn save_user(&self, user: User) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

impl UserService for UserManager {
    #[instrument(level = "debug", skip(self))]
    fn get_username(&self, id: i64) -> AppResult<Option<String>> {
        let user = self.repo.find_by_id(id)?;
        Ok(user.map(User::into_name))
    }

    #[instrument(level = "debug", skip(self, user), fields(user_id = user.id()))]
    fn save_user(&self, user: User) -> AppResult<()> {
        self.repo.save(user)
    }
}
