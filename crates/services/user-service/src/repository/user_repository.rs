//! User repository contract.

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Failure semantics belong to the implementation: an adapter reports
/// whatever its backing store can go wrong with through [`AppResult`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find user by ID.
    ///
    /// A missing user is `Ok(None)`, not an error.
    fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Create or overwrite the stored record for `user.id()`.
    ///
    /// Saving the same value twice leaves the same state as saving it once.
    fn save(&self, user: User) -> AppResult<()>;
}
