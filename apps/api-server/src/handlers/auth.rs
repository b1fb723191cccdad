//! Authentication handlers. Credentials live with the identity provider.

use actix_web::{HttpResponse, web};
use validator::Validate;

use tecla_shared::StandardResponse;
use tecla_shared::dto::{LoginRequest, RefreshTokenRequest, RegisterCredentialsRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterCredentialsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let credential = state.register_credentials.execute(req).await?;
    tracing::info!(uid = %credential.uid, "User credentials registered");

    Ok(HttpResponse::Created().json(StandardResponse::created(
        credential,
        "User credentials registered successfully",
    )))
}

/// POST /api/v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let session = state.login.execute(req).await?;
    tracing::info!(uid = %session.uid, "User logged in");

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        session,
        "User logged in successfully",
    )))
}

/// POST /api/v1/auth/refresh-token
///
/// A missing or blank `refresh_token` is rejected by the use case, so the
/// body itself may be empty JSON.
pub async fn refresh_token(
    state: web::Data<AppState>,
    body: web::Json<RefreshTokenRequest>,
) -> AppResult<HttpResponse> {
    let tokens = state.refresh_token.execute(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        tokens,
        "Token refreshed successfully",
    )))
}
