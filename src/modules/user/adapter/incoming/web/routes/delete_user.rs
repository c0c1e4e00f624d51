use actix_web::{delete, web, HttpResponse};

use crate::{
    modules::user::{
        adapter::incoming::web::error::UserApiError, application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Soft-delete a user
///
/// The row stays in storage with `deleted_at` set and is no longer readable.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not a decimal unsigned integer", body = ApiResponse),
        (status = 404, description = "No live user with this id", body = ApiResponse),
        (status = 500, description = "Storage failure", body = ApiResponse)
    )
)]
#[delete("/users/{id}")]
pub async fn delete_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, UserApiError> {
    let user_id: UserId = path.into_inner().parse()?;

    data.user_use_cases.soft_delete.execute(user_id).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("User deleted"))
}
