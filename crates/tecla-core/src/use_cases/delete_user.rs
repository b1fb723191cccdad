use std::sync::Arc;

use tecla_shared::dto::DeleteUserResponse;

use super::classify;
use crate::error::DomainError;
use crate::services::UserService;

/// Remove a student profile.
pub struct DeleteUserUseCase {
    users: Arc<UserService>,
}

impl DeleteUserUseCase {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    #[tracing::instrument(name = "DeleteUserUseCase::execute", skip(self))]
    pub async fn execute(&self, uid: &str) -> Result<DeleteUserResponse, DomainError> {
        let deleted = self
            .users
            .delete_user(uid)
            .await
            .map_err(|e| classify(e, "deleting user"))?;

        tracing::info!(deleted, "User deleted");
        Ok(DeleteUserResponse {
            uid: uid.to_string(),
            deleted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PianoLevel;
    use crate::testing::{FakeUserRepository, user};

    #[tokio::test]
    async fn test_delete_existing_then_missing() {
        let repo = Arc::new(FakeUserRepository::with_users([user(
            "u1",
            "a@b.com",
            "Jo",
            PianoLevel::TierI,
        )]));
        let use_case = DeleteUserUseCase::new(Arc::new(UserService::new(repo)));

        assert!(use_case.execute("u1").await.unwrap().deleted);
        assert!(matches!(
            use_case.execute("u1").await.unwrap_err(),
            DomainError::InvalidData(_)
        ));
    }
}
