//! Credential primitives for the local identity provider.

mod jwt;
mod password;

use thiserror::Error;

pub use jwt::{IdTokenClaims, JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;

/// Failures raised while hashing passwords or handling tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Password hashing failed: {0}")]
    HashingError(String),
}
