//! # Tecla User Service
//!
//! Actix-web HTTP server for student profiles and authentication.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    tracing::info!(
        environment = %config.environment,
        identity_provider = ?config.identity_provider,
        "Starting Tecla user service on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config)
        .await
        .map_err(std::io::Error::other)?;
    #[cfg(feature = "postgres")]
    let db = state.db.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Shutting down application...");

    #[cfg(feature = "postgres")]
    if let Some(db) = db.and_then(std::sync::Arc::into_inner) {
        if let Err(e) = db.close().await {
            tracing::error!(error = %e, "Error during shutdown");
        }
    }

    Ok(())
}
