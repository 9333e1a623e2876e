//! Error handling - every failure renders the response envelope.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use larder_core::RepoError;
use larder_core::ValidationError;
use larder_core::domain::InvalidRecipeId;
use larder_shared::ApiResponse;

/// Application-level error type that converts to envelope responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid recipe ID format")]
    InvalidId(#[from] InvalidRecipeId),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Recipe not found")]
    NotFound,

    #[error("Route not found")]
    RouteNotFound,

    /// Store failure while performing the action named in `message`.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        source: RepoError,
    },
}

impl AppError {
    /// Wrap a repository error with the action that failed, for `map_err`.
    pub fn storage(message: &'static str) -> impl FnOnce(RepoError) -> AppError {
        move |source| AppError::Storage { message, source }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::Validation(_) | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::InvalidId(_) => ApiResponse::failure("Invalid recipe ID format"),
            AppError::Validation(err) => {
                ApiResponse::failure("Validation error").with_error(err.to_string())
            }
            AppError::InvalidBody(detail) => {
                ApiResponse::failure("Invalid request body").with_error(detail.clone())
            }
            AppError::NotFound => ApiResponse::failure("Recipe not found"),
            AppError::RouteNotFound => ApiResponse::failure("Route not found"),
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
                ApiResponse::failure(*message).with_error(source.to_string())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Turn body parse failures into envelope responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidBody(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
