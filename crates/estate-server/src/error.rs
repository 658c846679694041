//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use estate_core::EstateError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] EstateError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, code) = match &self {
            ApiError::Validation(e) => {
                tracing::warn!("Rejected property attributes: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.user_message(), e.error_code())
            }
            ApiError::InvalidRequest(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone(), "INVALID_REQUEST")
            }
        };

        let body = Json(ErrorResponse {
            error,
            code: code.into(),
        });

        (status, body).into_response()
    }
}
