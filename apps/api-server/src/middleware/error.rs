//! Error handling - maps domain failures onto the standard envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use tecla_core::DomainError;
use tecla_shared::{ResponseCode, StandardResponse};
use validator::ValidationErrors;

/// Application-level error type rendered as `{code, message, data: null}`.
#[derive(Debug)]
pub enum AppError {
    Conflict(String),
    Unprocessable(String),
    NotFound(String),
    Unauthorized(String),
    Internal(String),
    Validation(Vec<String>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Conflict(msg)
            | AppError::Unprocessable(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Internal(msg) => f.write_str(msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl AppError {
    fn response_code(&self) -> ResponseCode {
        match self {
            AppError::Conflict(_) => ResponseCode::Conflict,
            AppError::Unprocessable(_) | AppError::Validation(_) => {
                ResponseCode::UnprocessableEntity
            }
            AppError::NotFound(_) => ResponseCode::NotFound,
            AppError::Unauthorized(_) => ResponseCode::Unauthorized,
            AppError::Internal(_) => ResponseCode::InternalServerError,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.response_code().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let body = match self {
            AppError::Conflict(_) => StandardResponse::conflict(message),
            AppError::Unprocessable(_) | AppError::Validation(_) => {
                StandardResponse::validation_error(message)
            }
            AppError::NotFound(_) => StandardResponse::not_found(message),
            AppError::Unauthorized(_) => StandardResponse::unauthorized(message),
            AppError::Internal(_) => StandardResponse::internal_error(message),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyExists(msg) => AppError::Conflict(msg),
            DomainError::InvalidData(msg) => AppError::Unprocessable(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Provider(msg) => AppError::Unauthorized(msg),
            DomainError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database connection error".to_string())
            }
            DomainError::Service(msg) => {
                tracing::error!("Service error: {}", msg);
                AppError::Internal("An unexpected error occurred".to_string())
            }
            DomainError::Unexpected(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                AppError::Internal("An unexpected error occurred".to_string())
            }
        }
    }
}

/// Flatten field errors into `field: message` entries, ordered by field.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{field}: {msg}")
                })
            })
            .collect();
        messages.sort();

        tracing::warn!(errors = ?messages, "Request validation failed");
        AppError::Validation(messages)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.error_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_domain_errors_map_to_fixed_statuses() {
        let cases = [
            (DomainError::AlreadyExists("dup".into()), 409),
            (DomainError::InvalidData("bad".into()), 422),
            (DomainError::NotFound("gone".into()), 404),
            (DomainError::Provider("denied".into()), 401),
            (DomainError::Connection("db down".into()), 500),
            (DomainError::Service("boom".into()), 500),
        ];

        for (err, expected) in cases {
            let (status, body) = body_of(err.into()).await;
            assert_eq!(status.as_u16(), expected);
            assert_eq!(body["code"], expected.to_string());
            assert!(body["data"].is_null());
        }
    }

    #[actix_web::test]
    async fn test_client_errors_echo_message_internal_errors_do_not() {
        let (_, body) = body_of(DomainError::NotFound("User with UID u1 not found".into()).into()).await;
        assert_eq!(body["message"], "User with UID u1 not found");

        let (_, body) = body_of(DomainError::Connection("password=hunter2".into()).into()).await;
        assert_eq!(body["message"], "Database connection error");
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 2, message = "too short"))]
        name: String,
        #[validate(length(min = 6, message = "too weak"))]
        password: String,
    }

    #[actix_web::test]
    async fn test_validation_errors_are_aggregated() {
        let probe = Probe {
            name: "J".into(),
            password: "123".into(),
        };
        let err = AppError::from(probe.validate().unwrap_err());

        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["message"],
            "Validation errors: name: too short; password: too weak"
        );
    }
}
