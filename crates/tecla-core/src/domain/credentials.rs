//! Identity-provider results. None of these are persisted here.

use crate::error::DomainError;

fn require(value: String, message: &str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::InvalidData(message.to_string()))
    } else {
        Ok(value)
    }
}

fn require_email(email: String) -> Result<String, DomainError> {
    if email.is_empty() || !email.contains('@') {
        Err(DomainError::InvalidData("Valid email is required".to_string()))
    } else {
        Ok(email)
    }
}

/// Credentials created by a registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCredential {
    uid: String,
    email: String,
}

impl AuthCredential {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            uid: require(uid.into(), "UID is required")?,
            email: require_email(email.into())?,
        })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Outcome of a password login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    uid: String,
    email: String,
    id_token: String,
    refresh_token: String,
}

impl LoginSession {
    pub fn new(
        uid: impl Into<String>,
        email: impl Into<String>,
        id_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            uid: require(uid.into(), "UID is required")?,
            email: require_email(email.into())?,
            id_token: require(id_token.into(), "ID token is required")?,
            refresh_token: require(refresh_token.into(), "Refresh token is required")?,
        })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

/// Tokens issued by a refresh call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    id_token: String,
    refresh_token: String,
}

impl TokenPair {
    pub fn new(
        id_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id_token: require(id_token.into(), "ID token is required")?,
            refresh_token: require(refresh_token.into(), "Refresh token is required")?,
        })
    }

    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_session_requires_tokens() {
        assert!(LoginSession::new("u1", "a@b.com", "", "r").is_err());
        assert!(LoginSession::new("u1", "a@b.com", "i", " ").is_err());
        assert!(LoginSession::new("u1", "a@b.com", "i", "r").is_ok());
    }

    #[test]
    fn test_auth_credential_requires_email() {
        let err = AuthCredential::new("u1", "nobody").unwrap_err();
        assert!(matches!(err, DomainError::InvalidData(_)));
    }

    #[test]
    fn test_token_pair_accessors() {
        let pair = TokenPair::new("id", "refresh").unwrap();
        assert_eq!(pair.id_token(), "id");
        assert_eq!(pair.refresh_token(), "refresh");
    }
}
