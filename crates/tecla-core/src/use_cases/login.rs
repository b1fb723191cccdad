use std::sync::Arc;

use tecla_shared::dto::{LoginRequest, LoginResponse};

use super::classify;
use crate::error::DomainError;
use crate::services::AuthService;

/// Password login through the identity provider.
pub struct LoginUseCase {
    auth: Arc<AuthService>,
}

impl LoginUseCase {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, DomainError> {
        let session = self
            .auth
            .login(&request.email, &request.password)
            .await
            .map_err(|e| classify(e, "logging in user"))?;

        tracing::info!(uid = session.uid(), "User logged in");
        Ok(LoginResponse {
            uid: session.uid().to_string(),
            email: session.email().to_string(),
            id_token: session.id_token().to_string(),
            refresh_token: session.refresh_token().to_string(),
        })
    }
}
