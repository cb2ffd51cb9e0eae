//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use webfuncs_core::{currency::FormatError, time::TimeError};
use webfuncs_shared::AppError;

/// `AppError` rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<TimeError> for ApiError {
    fn from(err: TimeError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
