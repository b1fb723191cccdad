//! Data Transfer Objects - request/response types for the API.
//!
//! Request types derive [`Validate`] so the HTTP layer can reject malformed
//! payloads field by field before they reach a use case.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to create a student profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "UID cannot be empty"))]
    pub uid: String,
    #[validate(
        length(min = 5, max = 255, message = "Email must be 5-255 characters"),
        custom(function = "validate_email_shape")
    )]
    pub email: String,
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    pub piano_level: String,
}

/// Partial update of a student profile. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(
        length(min = 5, max = 255, message = "Email must be 5-255 characters"),
        custom(function = "validate_email_shape")
    )]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,
    pub piano_level: Option<String>,
}

/// Response containing a student profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub piano_level: String,
}

/// Response to an existence probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExistsResponse {
    pub uid: String,
    pub exists: bool,
}

/// Response to a profile deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub uid: String,
    pub deleted: bool,
}

/// Request to register credentials with the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterCredentialsRequest {
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request to exchange a refresh token for a new token pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

/// Registered credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub uid: String,
    pub email: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// Refreshed tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub id_token: String,
    pub refresh_token: String,
}

fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email format".into()))
    }
}
