//! Use cases - one per application operation.
//!
//! Each use case takes a transport payload, calls exactly one service
//! operation and maps the entity back to a transport payload. Classified
//! errors pass through untouched; anything unclassified leaves as
//! [`DomainError::Service`].

mod create_user;
mod delete_user;
mod get_user;
mod login;
mod refresh_token;
mod register_credentials;
mod update_user;
mod user_exists;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use login::LoginUseCase;
pub use refresh_token::RefreshTokenUseCase;
pub use register_credentials::RegisterCredentialsUseCase;
pub use update_user::UpdateUserUseCase;
pub use user_exists::UserExistsUseCase;

use tecla_shared::dto::UserResponse;

use crate::domain::User;
use crate::error::DomainError;

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        uid: user.uid().to_string(),
        email: user.email().to_string(),
        name: user.name().to_string(),
        piano_level: user.piano_level().to_string(),
    }
}

/// Log a failed operation and normalize its error for the caller.
fn classify(err: DomainError, context: &str) -> DomainError {
    if err.is_classified() {
        tracing::warn!(code = %err.code(), error = %err, "Error {context}");
        err
    } else {
        tracing::error!(error = %err, "Unexpected error {context}");
        err.into_classified(context)
    }
}
