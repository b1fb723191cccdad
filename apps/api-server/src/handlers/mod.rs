//! HTTP handlers and route configuration.

mod auth;
mod health;
mod users;

use actix_web::{error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create_user))
                        .route("", web::get().to(users::list_users))
                        .route("/{uid}", web::get().to(users::get_user))
                        .route("/{uid}", web::patch().to(users::update_user))
                        .route("/{uid}", web::delete().to(users::delete_user))
                        .route("/{uid}/exists", web::get().to(users::user_exists)),
                )
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .route("/refresh-token", web::post().to(auth::refresh_token)),
                ),
        );
}

/// Malformed or incomplete JSON bodies answer 422 in the standard envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            JsonPayloadError::Deserialize(e) => format!("body: {e}"),
            JsonPayloadError::ContentType => "body: Expected application/json".to_string(),
            other => format!("body: {other}"),
        };
        AppError::Validation(vec![message]).into()
    })
}
