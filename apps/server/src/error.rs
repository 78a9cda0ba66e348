use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use goaltracker_core::errors::Error as CoreError;
use goaltracker_core::goals::GoalError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(CoreError::Goal(e @ GoalError::DateFormat(_))) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Core(e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, msg).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
