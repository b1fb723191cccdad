use std::sync::Arc;

use crate::domain::{PianoLevel, User, normalize_email};
use crate::error::DomainError;
use crate::ports::UserRepository;

const MIN_EMAIL_LEN: usize = 5;
const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 100;

/// Profile submitted for creation, not yet validated.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub piano_level: String,
}

/// Fields to replace on an existing profile. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub name: Option<String>,
    pub piano_level: Option<String>,
}

/// Domain service for student profiles.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Uniqueness is checked uid first, then email, before any field
    /// validation. A duplicate reported by the repository on insert is
    /// surfaced the same way.
    #[tracing::instrument(name = "UserService::create_user", skip_all, fields(uid = %candidate.uid))]
    pub async fn create_user(&self, candidate: NewUser) -> Result<User, DomainError> {
        let uid = candidate.uid.trim();
        if self.repo.exists_by_uid(uid).await? {
            return Err(DomainError::AlreadyExists(format!(
                "User with UID {uid} already exists"
            )));
        }

        let email = normalize_email(&candidate.email);
        if self.repo.exists_by_email(&email).await? {
            return Err(DomainError::AlreadyExists(format!(
                "User with email {email} already exists"
            )));
        }

        let user = validated_user(uid, &email, &candidate.name, &candidate.piano_level)?;

        Ok(self.repo.create(user).await?)
    }

    #[tracing::instrument(name = "UserService::update_user", skip(self, changes))]
    pub async fn update_user(&self, uid: &str, changes: UserChanges) -> Result<User, DomainError> {
        let current = self
            .repo
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| DomainError::InvalidData(format!("User with UID {uid} not found")))?;

        let email = changes.email.as_deref().unwrap_or(current.email());
        let name = changes.name.as_deref().unwrap_or(current.name());
        let piano_level = changes
            .piano_level
            .as_deref()
            .unwrap_or(current.piano_level().as_str());

        let merged = validated_user(current.uid(), email, name, piano_level)?;

        Ok(self.repo.update(merged).await?)
    }

    pub async fn get_user_by_uid(&self, uid: &str) -> Result<User, DomainError> {
        self.repo
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User with UID {uid} not found")))
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    #[tracing::instrument(name = "UserService::delete_user", skip(self))]
    pub async fn delete_user(&self, uid: &str) -> Result<bool, DomainError> {
        if !self.repo.exists_by_uid(uid).await? {
            return Err(DomainError::InvalidData(format!(
                "User with UID {uid} not found"
            )));
        }

        Ok(self.repo.delete(uid).await?)
    }

    pub async fn user_exists(&self, uid: &str) -> Result<bool, DomainError> {
        Ok(self.repo.exists_by_uid(uid).await?)
    }
}

/// Apply the profile rules and build the normalized entity.
fn validated_user(
    uid: &str,
    email: &str,
    name: &str,
    piano_level: &str,
) -> Result<User, DomainError> {
    validate_email(email)?;
    validate_name(name)?;
    let piano_level: PianoLevel = piano_level.parse()?;

    User::new(uid, email, name, piano_level)
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let email = email.trim();
    let invalid = || DomainError::InvalidData("Invalid email format".to_string());

    if email.chars().count() < MIN_EMAIL_LEN {
        return Err(invalid());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(invalid()),
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let len = name.trim().chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(DomainError::InvalidData(format!(
            "Name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters long"
        )));
    }
    Ok(())
}
