// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope returned on every failed request
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone, ToSchema)]
pub struct ApiError {
    /// Error code for programmatic handling
    #[schema(example = "USER_NOT_FOUND")]
    pub code: String,
    /// Human-readable error message
    #[schema(example = "User not found")]
    pub message: String,
}

impl ApiResponse {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
