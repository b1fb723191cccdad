use std::sync::Arc;

use tecla_shared::dto::{AuthResponse, RegisterCredentialsRequest};

use super::classify;
use crate::error::DomainError;
use crate::services::AuthService;

/// Register credentials with the identity provider.
pub struct RegisterCredentialsUseCase {
    auth: Arc<AuthService>,
}

impl RegisterCredentialsUseCase {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    #[tracing::instrument(name = "RegisterCredentialsUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: RegisterCredentialsRequest,
    ) -> Result<AuthResponse, DomainError> {
        let credential = self
            .auth
            .register_user(&request.email, &request.password)
            .await
            .map_err(|e| classify(e, "registering credentials"))?;

        tracing::info!(uid = credential.uid(), "Credentials registered");
        Ok(AuthResponse {
            uid: credential.uid().to_string(),
            email: credential.email().to_string(),
        })
    }
}
