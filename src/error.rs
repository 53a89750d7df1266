//! Typed errors and HTTP mapping.

use crate::validation::FieldError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrado";
pub const CORS_MESSAGE: &str = "Error de CORS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("validation failed ({} errors)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{}", CORS_MESSAGE)]
    CorsRejected,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("request body exceeds the size limit")]
    PayloadTooLarge,
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a failure to buffer the request body, keeping the 413 for oversized bodies.
    pub fn from_body_rejection(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

/// `{ "error": "..." }`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// `{ "errors": [ ... ] }`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { errors })).into_response();
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            AppError::CorsRejected => (StatusCode::FORBIDDEN, CORS_MESSAGE.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error en la base de datos".to_string())
            }
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Cuerpo de la petición demasiado grande".to_string()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor".to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_faults_map_to_500() {
        let response = AppError::Internal("state lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn oversized_body_maps_to_413() {
        assert_eq!(AppError::PayloadTooLarge.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn not_found_keeps_fixed_message() {
        assert_eq!(AppError::NotFound.to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
