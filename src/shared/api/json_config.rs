// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::debug;

/// Malformed or mistyped JSON bodies become a 400 with code `INVALID_BODY`
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        debug!(path = %req.path(), error = %message, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_BODY", &message),
        )
        .into()
    })
}
