//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod identity;
mod repository;

pub use identity::IdentityProvider;
pub use repository::UserRepository;
