use actix_web::{post, web, HttpResponse};

use crate::{
    modules::user::adapter::incoming::web::{
        error::UserApiError,
        routes::dto::{UserRequest, UserResponse},
    },
    shared::api::ApiResponse,
    AppState,
};

/// Create a user
///
/// The server assigns `id`, `created_at` and `updated_at`.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body", body = ApiResponse),
        (status = 500, description = "Storage failure", body = ApiResponse)
    )
)]
#[post("/users")]
pub async fn create_user_handler(
    req: web::Json<UserRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, UserApiError> {
    let user = data
        .user_use_cases
        .create
        .execute(req.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
