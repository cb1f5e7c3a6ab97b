//! User lookup used to resolve a verified token subject.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Read-only view of the user store
///
/// Registration and profile management live elsewhere; the session layer
/// only needs to know whether a subject still names a real user.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that ID
    /// * `Err(DomainError)` - Store error
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
}
