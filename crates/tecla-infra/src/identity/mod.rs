//! Identity-provider adapters.

#[cfg(feature = "firebase")]
mod firebase;
#[cfg(feature = "local-auth")]
mod local;

#[cfg(feature = "firebase")]
pub use firebase::{FirebaseConfig, FirebaseIdentityProvider};
#[cfg(feature = "local-auth")]
pub use local::LocalIdentityProvider;

/// A provider answer that does not form a valid entity is a provider fault.
#[cfg(any(feature = "firebase", feature = "local-auth"))]
pub(crate) fn malformed(err: tecla_core::DomainError) -> tecla_core::error::IdentityError {
    tracing::error!(error = %err, "Identity provider returned malformed data");
    tecla_core::error::IdentityError::Provider(err.to_string())
}
