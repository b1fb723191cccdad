use async_trait::async_trait;

use crate::domain::User;
use crate::error::RepoError;

/// Profile persistence. Rows are keyed by uid; email is unique.
///
/// Implementations must report unique-constraint violations on `create` and
/// `update` as [`RepoError::Duplicate`]; services rely on that as the final
/// word on uniqueness.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new profile.
    async fn create(&self, user: User) -> Result<User, RepoError>;

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, RepoError>;

    /// Look up by email. Implementations compare lower-cased.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    async fn exists_by_uid(&self, uid: &str) -> Result<bool, RepoError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError>;

    /// Overwrite an existing profile. Fails with [`RepoError::NotFound`] if
    /// the uid is unknown.
    async fn update(&self, user: User) -> Result<User, RepoError>;

    /// Remove a profile. Returns `false` if there was nothing to remove.
    async fn delete(&self, uid: &str) -> Result<bool, RepoError>;
}
