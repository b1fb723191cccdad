//! Standardized API response envelope.
//!
//! Every endpoint, successful or not, answers with
//! `{ "code": "<status>", "message": "...", "data": ... }`.

use serde::{Deserialize, Serialize};

/// Status codes carried in the envelope's `code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    Created,
    Unauthorized,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
}

impl ResponseCode {
    pub fn as_u16(self) -> u16 {
        match self {
            ResponseCode::Success => 200,
            ResponseCode::Created => 201,
            ResponseCode::Unauthorized => 401,
            ResponseCode::NotFound => 404,
            ResponseCode::Conflict => 409,
            ResponseCode::UnprocessableEntity => 422,
            ResponseCode::InternalServerError => 500,
        }
    }
}

/// Standard response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardResponse<T> {
    pub code: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> StandardResponse<T> {
    pub fn new(code: ResponseCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code.as_u16().to_string(),
            message: message.into(),
            data,
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::new(ResponseCode::Success, message, Some(data))
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(ResponseCode::Created, message, Some(data))
    }
}

impl StandardResponse<()> {
    pub fn error(code: ResponseCode, message: impl Into<String>) -> Self {
        Self::new(code, message, None)
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(ResponseCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::error(ResponseCode::Conflict, message)
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::error(ResponseCode::UnprocessableEntity, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::error(ResponseCode::Unauthorized, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::error(ResponseCode::InternalServerError, message)
    }
}
