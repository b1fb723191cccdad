//! Domain entities - the core business objects.

mod credentials;
mod piano_level;
mod user;

pub use credentials::{AuthCredential, LoginSession, TokenPair};
pub use piano_level::PianoLevel;
pub use user::User;
pub(crate) use user::normalize_email;
