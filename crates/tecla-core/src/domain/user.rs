use serde::Serialize;

use super::PianoLevel;
use crate::error::DomainError;

/// Student profile.
///
/// Always valid: the only way to obtain one is [`User::new`], which trims the
/// uid and name, lower-cases the email, and rejects empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    uid: String,
    email: String,
    name: String,
    piano_level: PianoLevel,
}

impl User {
    pub fn new(
        uid: impl Into<String>,
        email: impl AsRef<str>,
        name: impl AsRef<str>,
        piano_level: PianoLevel,
    ) -> Result<Self, DomainError> {
        let uid = uid.into().trim().to_string();
        if uid.is_empty() {
            return Err(DomainError::InvalidData("UID is required".to_string()));
        }

        let email = normalize_email(email.as_ref());
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidData("Valid email is required".to_string()));
        }

        let name = name.as_ref().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::InvalidData("Name is required".to_string()));
        }

        Ok(Self {
            uid,
            email,
            name,
            piano_level,
        })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piano_level(&self) -> PianoLevel {
        self.piano_level
    }
}

/// Canonical form used for storage and uniqueness checks.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
