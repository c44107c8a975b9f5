//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// Plain `{ "message": ... }` body used for confirmations and for the
/// not-found and validation failures handlers report themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub const POST_NOT_FOUND: &'static str = "Post not found";
    pub const POST_DELETED: &'static str = "Post deleted successfully";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn post_not_found() -> Self {
        Self::new(Self::POST_NOT_FOUND)
    }

    pub fn post_deleted() -> Self {
        Self::new(Self::POST_DELETED)
    }
}

/// Catch-all error body: `{ "success": false, "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
