use std::sync::Arc;

use tecla_shared::dto::UserResponse;

use super::{classify, user_response};
use crate::error::DomainError;
use crate::services::UserService;

/// Read student profiles.
pub struct GetUserUseCase {
    users: Arc<UserService>,
}

impl GetUserUseCase {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    #[tracing::instrument(name = "GetUserUseCase::by_uid", skip(self))]
    pub async fn by_uid(&self, uid: &str) -> Result<UserResponse, DomainError> {
        let user = self
            .users
            .get_user_by_uid(uid)
            .await
            .map_err(|e| classify(e, "fetching user"))?;

        tracing::debug!("User retrieved successfully");
        Ok(user_response(&user))
    }

    #[tracing::instrument(name = "GetUserUseCase::all", skip(self))]
    pub async fn all(&self) -> Result<Vec<UserResponse>, DomainError> {
        let users = self
            .users
            .get_all_users()
            .await
            .map_err(|e| classify(e, "fetching all users"))?;

        tracing::info!(count = users.len(), "Retrieved users");
        Ok(users.iter().map(user_response).collect())
    }
}
