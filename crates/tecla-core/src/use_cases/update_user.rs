use std::sync::Arc;

use tecla_shared::dto::{UpdateUserRequest, UserResponse};

use super::{classify, user_response};
use crate::error::DomainError;
use crate::services::{UserChanges, UserService};

/// Replace some fields of a student profile.
pub struct UpdateUserUseCase {
    users: Arc<UserService>,
}

impl UpdateUserUseCase {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    #[tracing::instrument(name = "UpdateUserUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        uid: &str,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, DomainError> {
        tracing::info!("Updating user");

        let changes = UserChanges {
            email: request.email,
            name: request.name,
            piano_level: request.piano_level,
        };

        let user = self
            .users
            .update_user(uid, changes)
            .await
            .map_err(|e| classify(e, "during update"))?;

        tracing::info!("User updated successfully");
        Ok(user_response(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PianoLevel;
    use crate::testing::{FakeUserRepository, user};

    #[tokio::test]
    async fn test_update_piano_level_keeps_other_fields() {
        let repo = Arc::new(FakeUserRepository::with_users([user(
            "u1",
            "a@b.com",
            "Jo",
            PianoLevel::TierI,
        )]));
        let use_case = UpdateUserUseCase::new(Arc::new(UserService::new(repo.clone())));

        let updated = use_case
            .execute(
                "u1",
                UpdateUserRequest {
                    piano_level: Some("teclado III".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Jo");
        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.piano_level, "teclado III");
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let repo = Arc::new(FakeUserRepository::default());
        let use_case = UpdateUserUseCase::new(Arc::new(UserService::new(repo.clone())));

        let err = use_case
            .execute("ghost", UpdateUserRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidData(_)));
        assert!(!repo.called("update"));
    }
}
