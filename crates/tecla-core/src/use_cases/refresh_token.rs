use std::sync::Arc;

use tecla_shared::dto::{RefreshTokenRequest, TokenResponse};

use super::classify;
use crate::error::DomainError;
use crate::services::AuthService;

/// Exchange a refresh token for new tokens.
pub struct RefreshTokenUseCase {
    auth: Arc<AuthService>,
}

impl RefreshTokenUseCase {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    #[tracing::instrument(name = "RefreshTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, request: RefreshTokenRequest) -> Result<TokenResponse, DomainError> {
        let pair = self
            .auth
            .refresh_token(request.refresh_token.as_deref())
            .await
            .map_err(|e| classify(e, "refreshing token"))?;

        tracing::info!("Token refreshed");
        Ok(TokenResponse {
            id_token: pair.id_token().to_string(),
            refresh_token: pair.refresh_token().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeIdentityProvider;

    #[tokio::test]
    async fn test_missing_token_is_invalid_data() {
        let provider = Arc::new(FakeIdentityProvider::default());
        let use_case = RefreshTokenUseCase::new(Arc::new(AuthService::new(provider.clone())));

        let err = use_case
            .execute(RefreshTokenRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidData(_)));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_refresh_maps_pair() {
        let provider = Arc::new(FakeIdentityProvider::default());
        let use_case = RefreshTokenUseCase::new(Arc::new(AuthService::new(provider)));

        let response = use_case
            .execute(RefreshTokenRequest {
                refresh_token: Some("r1".into()),
            })
            .await
            .unwrap();

        assert_eq!(response.id_token, "id-for-r1");
        assert_eq!(response.refresh_token, "rotated");
    }
}
