use std::any::Any;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::validation::FieldError;

pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Mail capability not configured: {0}")]
    MailNotConfigured(String),

    #[error("Mail delivery failed: {0}")]
    Delivery(String),

    #[error("CV data error: {0}")]
    CvData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "errors": errors }),
            ),
            AppError::UnsupportedContentType => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": "Content-Type must be application/json"
                }),
            ),
            AppError::InvalidQuery(rejection) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": rejection.body_text() }),
            ),
            AppError::MalformedBody(detail) => {
                tracing::debug!("Rejected malformed body: {detail}");
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "success": false,
                        "message": "Request body must be valid JSON"
                    }),
                )
            }
            AppError::MailNotConfigured(detail) => {
                tracing::error!("Mail configuration error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "The contact form is temporarily unavailable. Please try again later."
                    }),
                )
            }
            AppError::Delivery(detail) => {
                tracing::error!("Mail delivery error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "Your message could not be sent. Please try again later."
                    }),
                )
            }
            AppError::CvData(detail) => {
                tracing::error!("PDF data error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to generate PDF data" }),
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": message }),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": GENERIC_FAILURE_MESSAGE }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Converts a handler panic (caught by `CatchPanicLayer`) into the generic
/// 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!("Handler panicked: {detail}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": GENERIC_FAILURE_MESSAGE })),
    )
        .into_response()
}
