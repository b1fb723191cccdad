//! Identity-provider port.

use async_trait::async_trait;

use crate::domain::{AuthCredential, LoginSession, TokenPair};
use crate::error::IdentityError;

/// External identity provider owning credentials and sessions.
/// This service never sees stored passwords.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create credentials for a new account.
    async fn register_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthCredential, IdentityError>;

    /// Password login. Unknown account or wrong password is
    /// [`IdentityError::NotFound`].
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, IdentityError>;

    /// Exchange a refresh token for a fresh token pair.
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, IdentityError>;
}
