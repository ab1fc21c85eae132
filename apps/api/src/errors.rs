use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::contact::models::{ContactResponse, DELIVERY_FAILED_MESSAGE};
use crate::contact::validation::ValidationError;
use crate::mailer::MailError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Delivery error: {0}")]
    Delivery(#[from] MailError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::debug!("Rejected contact submission: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Delivery(e) => {
                // Provider detail stays in the logs; callers get a generic message.
                tracing::error!("Email delivery failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DELIVERY_FAILED_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ContactResponse::failed(message))).into_response()
    }
}
