//! In-process identity provider for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tecla_core::domain::{AuthCredential, LoginSession, TokenPair};
use tecla_core::error::IdentityError;
use tecla_core::ports::IdentityProvider;

use super::malformed;
use crate::auth::{Argon2PasswordService, AuthError, IdTokenClaims, JwtConfig, JwtTokenService};
use crate::mask_email;

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    email: String,
    password_hash: String,
}

#[derive(Default)]
struct Store {
    /// Keyed by lower-cased email.
    accounts: HashMap<String, Account>,
    /// Refresh token -> lower-cased email of its account.
    refresh_tokens: HashMap<String, String>,
    /// Lower-cased email -> the one refresh token still valid for it.
    live_tokens: HashMap<String, String>,
}

/// Credentials kept in memory: Argon2 hashes, HS256 id tokens and
/// single-use opaque refresh tokens, one live per account. Everything is
/// lost on restart.
pub struct LocalIdentityProvider {
    store: RwLock<Store>,
    passwords: Argon2PasswordService,
    tokens: JwtTokenService,
}

impl LocalIdentityProvider {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            passwords: Argon2PasswordService::new(),
            tokens: JwtTokenService::new(config),
        }
    }

    /// Check an id token issued by this provider.
    pub fn verify_id_token(&self, token: &str) -> Result<IdTokenClaims, IdentityError> {
        self.tokens.validate(token).map_err(provider_err)
    }

    /// Issue a refresh token for `key`, revoking the one issued before it.
    fn issue_refresh_token(store: &mut Store, key: &str) -> String {
        let token = Uuid::new_v4().to_string();
        if let Some(previous) = store.live_tokens.insert(key.to_string(), token.clone()) {
            store.refresh_tokens.remove(&previous);
        }
        store.refresh_tokens.insert(token.clone(), key.to_string());
        token
    }
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::new(JwtConfig::default())
    }
}

fn provider_err(err: AuthError) -> IdentityError {
    IdentityError::Provider(err.to_string())
}

fn invalid_credentials() -> IdentityError {
    IdentityError::NotFound("Invalid credentials".to_string())
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn register_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthCredential, IdentityError> {
        let key = email.trim().to_lowercase();
        let password_hash = self.passwords.hash(password).map_err(provider_err)?;

        let mut store = self.store.write().await;
        if store.accounts.contains_key(&key) {
            return Err(IdentityError::AlreadyExists(format!(
                "User with email {key} already exists"
            )));
        }

        let credential =
            AuthCredential::new(Uuid::new_v4().simple().to_string(), key.clone()).map_err(malformed)?;
        store.accounts.insert(
            key,
            Account {
                uid: credential.uid().to_string(),
                email: credential.email().to_string(),
                password_hash,
            },
        );

        tracing::info!(user_email = %mask_email(credential.email()), "Local account registered");
        Ok(credential)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, IdentityError> {
        let key = email.trim().to_lowercase();

        let account = self
            .store
            .read()
            .await
            .accounts
            .get(&key)
            .cloned()
            .ok_or_else(invalid_credentials)?;

        if !self
            .passwords
            .verify(password, &account.password_hash)
            .map_err(provider_err)?
        {
            tracing::debug!(user_email = %mask_email(&key), "Password mismatch");
            return Err(invalid_credentials());
        }

        let id_token = self
            .tokens
            .issue(&account.uid, &account.email)
            .map_err(provider_err)?;
        let refresh_token = Self::issue_refresh_token(&mut *self.store.write().await, &key);

        LoginSession::new(account.uid, account.email, id_token, refresh_token).map_err(malformed)
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, IdentityError> {
        let mut store = self.store.write().await;

        let invalid = || IdentityError::Provider("Invalid refresh token".to_string());
        let key = store.refresh_tokens.remove(refresh_token).ok_or_else(invalid)?;
        let account = store.accounts.get(&key).cloned().ok_or_else(invalid)?;

        let id_token = self
            .tokens
            .issue(&account.uid, &account.email)
            .map_err(provider_err)?;
        let rotated = Self::issue_refresh_token(&mut store, &key);

        TokenPair::new(id_token, rotated).map_err(malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> LocalIdentityProvider {
        LocalIdentityProvider::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        })
    }

    #[tokio::test]
    async fn test_register_login_refresh_round_trip() {
        let provider = provider();

        let credential = provider
            .register_credentials("Ana@Example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(credential.email(), "ana@example.com");

        let session = provider.login("ana@example.com", "secret1").await.unwrap();
        assert_eq!(session.uid(), credential.uid());

        let claims = provider.verify_id_token(session.id_token()).unwrap();
        assert_eq!(claims.sub, credential.uid());
        assert_eq!(claims.email, "ana@example.com");

        let pair = provider.refresh_token(session.refresh_token()).await.unwrap();
        assert_ne!(pair.refresh_token(), session.refresh_token());
        assert!(provider.verify_id_token(pair.id_token()).is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_email_already_exists() {
        let provider = provider();
        provider
            .register_credentials("ana@example.com", "secret1")
            .await
            .unwrap();

        let err = provider
            .register_credentials("ANA@example.com", "other-secret")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_account_not_found() {
        let provider = provider();
        provider
            .register_credentials("ana@example.com", "secret1")
            .await
            .unwrap();

        let err = provider.login("ana@example.com", "secret2").await.unwrap_err();
        assert!(matches!(err, IdentityError::NotFound(msg) if msg == "Invalid credentials"));

        let err = provider.login("bob@example.com", "secret1").await.unwrap_err();
        assert!(matches!(err, IdentityError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_refresh_token_is_single_use() {
        let provider = provider();
        provider
            .register_credentials("ana@example.com", "secret1")
            .await
            .unwrap();
        let session = provider.login("ana@example.com", "secret1").await.unwrap();

        provider.refresh_token(session.refresh_token()).await.unwrap();

        let err = provider
            .refresh_token(session.refresh_token())
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::Provider(msg) if msg == "Invalid refresh token"));
    }

    #[tokio::test]
    async fn test_new_login_revokes_previous_refresh_token() {
        let provider = provider();
        provider
            .register_credentials("ana@example.com", "secret1")
            .await
            .unwrap();

        let first = provider.login("ana@example.com", "secret1").await.unwrap();
        let mut latest = first.clone();
        for _ in 0..3 {
            latest = provider.login("ana@example.com", "secret1").await.unwrap();
        }

        assert_eq!(provider.store.read().await.refresh_tokens.len(), 1);
        assert!(provider.refresh_token(first.refresh_token()).await.is_err());
        assert!(provider.refresh_token(latest.refresh_token()).await.is_ok());
        assert_eq!(provider.store.read().await.refresh_tokens.len(), 1);
    }
}
