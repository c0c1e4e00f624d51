use actix_web::{put, web, HttpResponse};

use crate::{
    modules::user::{
        adapter::incoming::web::{
            error::UserApiError,
            routes::dto::{UserRequest, UserResponse},
        },
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Replace username and email of a live user
///
/// The id is taken from the path; an `id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed id or body", body = ApiResponse),
        (status = 404, description = "No live user with this id", body = ApiResponse),
        (status = 500, description = "Storage failure", body = ApiResponse)
    )
)]
#[put("/users/{id}")]
pub async fn update_user_handler(
    path: web::Path<String>,
    req: web::Json<UserRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, UserApiError> {
    let user_id: UserId = path.into_inner().parse()?;

    let user = data
        .user_use_cases
        .update
        .execute(user_id, req.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
