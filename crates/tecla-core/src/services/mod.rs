//! Domain services - invariants enforced before any port is called.

mod auth_service;
mod user_service;

pub use auth_service::AuthService;
pub use user_service::{NewUser, UserChanges, UserService};
