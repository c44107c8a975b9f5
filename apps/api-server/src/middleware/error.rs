//! Error handling - maps failures onto the API's JSON error bodies.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use blog_core::DomainError;
use blog_core::error::RepoError;
use blog_shared::{ErrorResponse, MessageResponse};

/// Application-level error type.
///
/// `NotFound` and `Validation` are the failures handlers report themselves and
/// answer with `{message}`. Everything else is `Unhandled` and goes through
/// the catch-all body `{success: false, message}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{message}")]
    Unhandled { status: StatusCode, message: String },
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound(MessageResponse::POST_NOT_FOUND.to_string())
    }

    /// A request body that is present but not a `{title, content}` object.
    pub fn malformed_body(err: impl std::fmt::Display) -> Self {
        AppError::Unhandled {
            status: StatusCode::BAD_REQUEST,
            message: format!("Malformed request body: {err}"),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Unhandled {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unhandled { status, .. } => *status,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(message) | AppError::Validation(message) => {
                HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
            }
            AppError::Unhandled { status, message } => {
                tracing::error!(status = status.as_u16(), "Error: {}", message);
                let body = if message.is_empty() {
                    ErrorResponse::internal_error()
                } else {
                    ErrorResponse::new(message)
                };
                HttpResponse::build(*status).json(body)
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::post_not_found(),
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::post_not_found(),
            RepoError::Constraint(msg) => AppError::internal(msg),
        }
    }
}

/// A path id that is not an integer can never name a post.
pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), "Unparseable post id: {}", err);
    AppError::post_not_found().into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.error_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_domain_errors_map_to_message_bodies() {
        let (status, body) = body_json(DomainError::NotFound { id: 3 }.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "Post not found" }));

        let (status, body) =
            body_json(DomainError::Validation("Title and content are required".into()).into())
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "message": "Title and content are required" })
        );
    }

    #[actix_web::test]
    async fn test_unhandled_errors_use_catch_all_body() {
        let (status, body) = body_json(RepoError::Constraint("duplicate post id 5".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "duplicate post id 5" })
        );

        let (status, body) = body_json(AppError::internal("")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
    }
}
