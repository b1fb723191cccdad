//! # Tecla Infrastructure
//!
//! Concrete implementations of the ports defined in `tecla-core`:
//! profile persistence and identity providers.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL profile repository via SeaORM
//! - `firebase` - Firebase Authentication REST client
//! - `local-auth` - In-process identity provider (Argon2 + JWT)

pub mod database;
pub mod identity;

#[cfg(feature = "local-auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresUserRepository};

#[cfg(feature = "firebase")]
pub use identity::{FirebaseConfig, FirebaseIdentityProvider};

#[cfg(feature = "local-auth")]
pub use identity::LocalIdentityProvider;

/// Mask an email for logging: `j***@example.com`.
#[cfg_attr(
    not(any(feature = "postgres", feature = "firebase", feature = "local-auth")),
    allow(dead_code)
)]
pub(crate) fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john@example.com"), "j***@example.com");
        assert_eq!(mask_email("j@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
