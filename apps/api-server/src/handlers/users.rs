//! Student profile handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use tecla_shared::StandardResponse;
use tecla_shared::dto::{CreateUserRequest, UpdateUserRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    tracing::info!(uid = %req.uid, "Creating user");
    let user = state.create_user.execute(req).await?;

    Ok(HttpResponse::Created().json(StandardResponse::created(
        user,
        "User created successfully",
    )))
}

/// GET /api/v1/users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.get_user.all().await?;

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        users,
        "Users retrieved successfully",
    )))
}

/// GET /api/v1/users/{uid}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = state.get_user.by_uid(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        user,
        "User profile retrieved successfully",
    )))
}

/// PATCH /api/v1/users/{uid}
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = state.update_user.execute(&path.into_inner(), req).await?;

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        user,
        "User updated successfully",
    )))
}

/// DELETE /api/v1/users/{uid}
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let deleted = state.delete_user.execute(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        deleted,
        "User deleted successfully",
    )))
}

/// GET /api/v1/users/{uid}/exists
pub async fn user_exists(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let exists = state.user_exists.execute(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(StandardResponse::success(
        exists,
        "User existence checked",
    )))
}
