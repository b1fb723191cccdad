use std::sync::Arc;

use tecla_shared::dto::UserExistsResponse;

use super::classify;
use crate::error::DomainError;
use crate::services::UserService;

/// Probe whether a profile exists for a uid.
pub struct UserExistsUseCase {
    users: Arc<UserService>,
}

impl UserExistsUseCase {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, uid: &str) -> Result<UserExistsResponse, DomainError> {
        let exists = self
            .users
            .user_exists(uid)
            .await
            .map_err(|e| classify(e, "checking user existence"))?;

        Ok(UserExistsResponse {
            uid: uid.to_string(),
            exists,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PianoLevel;
    use crate::testing::{FakeUserRepository, user};

    #[tokio::test]
    async fn test_exists() {
        let repo = Arc::new(FakeUserRepository::with_users([user(
            "u1",
            "a@b.com",
            "Jo",
            PianoLevel::TierI,
        )]));
        let use_case = UserExistsUseCase::new(Arc::new(UserService::new(repo)));

        assert!(use_case.execute("u1").await.unwrap().exists);
        assert!(!use_case.execute("u2").await.unwrap().exists);
    }
}
