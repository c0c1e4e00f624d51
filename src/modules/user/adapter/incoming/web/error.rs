// src/modules/user/adapter/incoming/web/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::{debug, error};

use crate::modules::user::application::{
    domain::entities::UserIdParseError,
    ports::incoming::use_cases::{
        CreateUserError, GetUserError, SoftDeleteUserError, UpdateUserError,
    },
};
use crate::shared::api::ApiResponse;

/// Every failure a user route can produce.
///
/// Handlers only propagate with `?`; the status code and body are decided
/// here, on actix-web's error path.
#[derive(Debug, thiserror::Error)]
pub enum UserApiError {
    #[error(transparent)]
    InvalidId(#[from] UserIdParseError),

    #[error("User not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ResponseError for UserApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            UserApiError::NotFound => StatusCode::NOT_FOUND,
            UserApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            UserApiError::InvalidId(e) => {
                debug!(error = %e, "Rejected user id");
                ApiResponse::bad_request("INVALID_USER_ID", &e.to_string())
            }
            UserApiError::NotFound => {
                debug!("User not found");
                ApiResponse::not_found("USER_NOT_FOUND", "User not found")
            }
            UserApiError::Storage(msg) => {
                error!(error = %msg, "Storage failure while handling user request");
                ApiResponse::internal_error()
            }
        }
    }
}

impl From<CreateUserError> for UserApiError {
    fn from(err: CreateUserError) -> Self {
        match err {
            CreateUserError::RepositoryError(msg) => UserApiError::Storage(msg),
        }
    }
}

impl From<GetUserError> for UserApiError {
    fn from(err: GetUserError) -> Self {
        match err {
            GetUserError::UserNotFound => UserApiError::NotFound,
            GetUserError::RepositoryError(msg) => UserApiError::Storage(msg),
        }
    }
}

impl From<UpdateUserError> for UserApiError {
    fn from(err: UpdateUserError) -> Self {
        match err {
            UpdateUserError::UserNotFound => UserApiError::NotFound,
            UpdateUserError::RepositoryError(msg) => UserApiError::Storage(msg),
        }
    }
}

impl From<SoftDeleteUserError> for UserApiError {
    fn from(err: SoftDeleteUserError) -> Self {
        match err {
            SoftDeleteUserError::UserNotFound => UserApiError::NotFound,
            SoftDeleteUserError::RepositoryError(msg) => UserApiError::Storage(msg),
        }
    }
}
