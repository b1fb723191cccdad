use std::sync::Arc;

use crate::domain::{AuthCredential, LoginSession, TokenPair};
use crate::error::{DomainError, IdentityError};
use crate::ports::IdentityProvider;

const MIN_PASSWORD_LEN: usize = 6;

/// Domain service for the identity-provider side: credentials, logins and
/// token refresh. Obviously invalid input never reaches the provider.
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    #[tracing::instrument(name = "AuthService::register_user", skip(self, password))]
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthCredential, DomainError> {
        validate_credentials(email, password)?;

        self.provider
            .register_credentials(email, password)
            .await
            .map_err(|err| match err {
                IdentityError::AlreadyExists(msg) => DomainError::AlreadyExists(msg),
                other => DomainError::Provider(other.to_string()),
            })
    }

    #[tracing::instrument(name = "AuthService::login", skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, DomainError> {
        validate_credentials(email, password)?;

        // A missing account is an authentication failure, not an absent value.
        self.provider
            .login(email, password)
            .await
            .map_err(|err| DomainError::Provider(err.to_string()))
    }

    #[tracing::instrument(name = "AuthService::refresh_token", skip_all)]
    pub async fn refresh_token(&self, refresh_token: Option<&str>) -> Result<TokenPair, DomainError> {
        let token = refresh_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| DomainError::InvalidData("Refresh token is required".to_string()))?;

        self.provider
            .refresh_token(token)
            .await
            .map_err(|err| DomainError::Provider(err.to_string()))
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), DomainError> {
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::InvalidData("Invalid email format".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::InvalidData(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}
