use std::sync::Arc;

use tecla_shared::dto::{CreateUserRequest, UserResponse};

use super::{classify, user_response};
use crate::error::DomainError;
use crate::services::{NewUser, UserService};

/// Create a student profile.
pub struct CreateUserUseCase {
    users: Arc<UserService>,
}

impl CreateUserUseCase {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    #[tracing::instrument(name = "CreateUserUseCase::execute", skip_all, fields(uid = %request.uid))]
    pub async fn execute(&self, request: CreateUserRequest) -> Result<UserResponse, DomainError> {
        tracing::info!("Initiating user registration");

        let candidate = NewUser {
            uid: request.uid,
            email: request.email,
            name: request.name,
            piano_level: request.piano_level,
        };

        let user = self
            .users
            .create_user(candidate)
            .await
            .map_err(|e| classify(e, "during registration"))?;

        tracing::info!("User registered successfully");
        Ok(user_response(&user))
    }
}
