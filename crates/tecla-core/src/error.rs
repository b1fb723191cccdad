//! Domain-level error types.

use std::fmt;

use thiserror::Error;

/// Domain errors - the closed taxonomy every use case reports.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    InvalidData(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Service(String),

    /// Failure nobody classified. Use cases turn this into [`DomainError::Service`].
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Classification carried by every [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Conflict,
    Unprocessable,
    NotFound,
    Unauthorized,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Conflict => "409",
            ErrorCode::Unprocessable => "422",
            ErrorCode::NotFound => "404",
            ErrorCode::Unauthorized => "401",
            ErrorCode::Internal => "500",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::AlreadyExists(_) => ErrorCode::Conflict,
            DomainError::InvalidData(_) => ErrorCode::Unprocessable,
            DomainError::NotFound(_) => ErrorCode::NotFound,
            DomainError::Provider(_) => ErrorCode::Unauthorized,
            DomainError::Connection(_) | DomainError::Service(_) | DomainError::Unexpected(_) => {
                ErrorCode::Internal
            }
        }
    }

    /// Whether this error belongs to the closed taxonomy.
    pub fn is_classified(&self) -> bool {
        !matches!(self, DomainError::Unexpected(_))
    }

    /// Collapse an unclassified failure into a service error, keeping the
    /// original message after `context`.
    pub fn into_classified(self, context: &str) -> Self {
        match self {
            DomainError::Unexpected(err) => {
                DomainError::Service(format!("Unexpected error {context}: {err:#}"))
            }
            classified => classified,
        }
    }
}

/// Column whose unique constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Uid,
    Email,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Duplicate {field:?}: {value}")]
    Duplicate { field: UniqueField, value: String },

    #[error("Entity not found: {0}")]
    NotFound(String),

    /// A stored row could not be turned back into a domain entity.
    #[error("Stored record is invalid: {0}")]
    Mapping(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => DomainError::Connection(msg),
            RepoError::Duplicate {
                field: UniqueField::Uid,
                value,
            } => DomainError::AlreadyExists(format!("User with UID {value} already exists")),
            RepoError::Duplicate {
                field: UniqueField::Email,
                value,
            } => DomainError::AlreadyExists(format!("User with email {value} already exists")),
            RepoError::NotFound(msg) => DomainError::NotFound(msg),
            err @ RepoError::Mapping(_) => DomainError::Unexpected(err.into()),
        }
    }
}

/// Identity-provider errors.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Provider(String),
}
