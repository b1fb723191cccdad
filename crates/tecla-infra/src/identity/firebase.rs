//! Firebase Authentication over its REST API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use tecla_core::domain::{AuthCredential, LoginSession, TokenPair};
use tecla_core::error::IdentityError;
use tecla_core::ports::IdentityProvider;

use super::malformed;
use crate::mask_email;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";

/// Firebase project settings.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub web_api_key: String,
    pub identity_toolkit_url: String,
    pub secure_token_url: String,
}

impl FirebaseConfig {
    pub fn new(web_api_key: impl Into<String>) -> Self {
        Self {
            web_api_key: web_api_key.into(),
            identity_toolkit_url: IDENTITY_TOOLKIT_URL.to_string(),
            secure_token_url: SECURE_TOKEN_URL.to_string(),
        }
    }
}

pub struct FirebaseIdentityProvider {
    http_client: Client,
    config: FirebaseConfig,
}

impl FirebaseIdentityProvider {
    pub fn new(config: FirebaseConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn accounts_url(&self, action: &str) -> String {
        format!(
            "{}/accounts:{action}?key={}",
            self.config.identity_toolkit_url, self.config.web_api_key
        )
    }

    fn token_url(&self) -> String {
        format!(
            "{}/token?key={}",
            self.config.secure_token_url, self.config.web_api_key
        )
    }
}

fn transport_err(err: reqwest::Error) -> IdentityError {
    tracing::error!(error = %err, "Firebase request failed");
    IdentityError::Provider(err.to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the Firebase error code, e.g. `EMAIL_EXISTS`, from an error body.
/// Codes may carry a detail suffix: `WEAK_PASSWORD : Password should be ...`.
fn error_code(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let code = envelope.error.message;
    Some(match code.split_once(" : ") {
        Some((head, _)) => head.trim().to_string(),
        None => code,
    })
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    #[tracing::instrument(name = "firebase.sign_up", skip_all)]
    async fn register_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthCredential, IdentityError> {
        let response = self
            .http_client
            .post(self.accounts_url("signUp"))
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(transport_err)?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.map_err(transport_err)?;
            let code = error_code(&body);
            tracing::warn!(
                user_email = %mask_email(email),
                status = %status,
                code = code.as_deref().unwrap_or("unknown"),
                "Firebase sign-up rejected"
            );
            return Err(match code.as_deref() {
                Some("EMAIL_EXISTS") => {
                    IdentityError::AlreadyExists(format!("User with email {email} already exists"))
                }
                Some(code) => IdentityError::Provider(code.to_string()),
                None => IdentityError::Provider(format!("Sign-up failed with status {status}")),
            });
        }

        let account: AccountResponse = response.json().await.map_err(transport_err)?;
        tracing::info!(user_email = %mask_email(&account.email), "Firebase account created");

        AuthCredential::new(account.local_id, account.email).map_err(malformed)
    }

    #[tracing::instrument(name = "firebase.sign_in", skip_all)]
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, IdentityError> {
        let response = self
            .http_client
            .post(self.accounts_url("signInWithPassword"))
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(transport_err)?;

        if response.status() != StatusCode::OK {
            tracing::debug!(
                user_email = %mask_email(email),
                status = %response.status(),
                "Firebase sign-in rejected"
            );
            return Err(IdentityError::NotFound("Invalid credentials".to_string()));
        }

        let account: AccountResponse = response.json().await.map_err(transport_err)?;

        LoginSession::new(
            account.local_id,
            account.email,
            account.id_token,
            account.refresh_token,
        )
        .map_err(malformed)
    }

    #[tracing::instrument(name = "firebase.refresh", skip_all)]
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, IdentityError> {
        let response = self
            .http_client
            .post(self.token_url())
            .form(&RefreshRequest {
                grant_type: "refresh_token",
                refresh_token,
            })
            .send()
            .await
            .map_err(transport_err)?;

        if response.status() != StatusCode::OK {
            tracing::debug!(status = %response.status(), "Firebase token refresh rejected");
            return Err(IdentityError::Provider("Invalid refresh token".to_string()));
        }

        let tokens: RefreshResponse = response.json().await.map_err(transport_err)?;

        TokenPair::new(tokens.id_token, tokens.refresh_token).map_err(malformed)
    }
}
