use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::LeagueError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::NotFound(msg) => ApiError::NotFound(msg),
            LeagueError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            LeagueError::InvalidState(msg) => ApiError::Conflict(msg),
        }
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
