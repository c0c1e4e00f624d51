use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::modules::user::adapter::incoming::web::routes::dto::{UserRequest, UserResponse};
use crate::shared::api::{ApiError, ApiResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "0.1.0",
        description = "CRUD endpoints for the User resource"
    ),
    paths(
        crate::modules::user::adapter::incoming::web::routes::create_user::create_user_handler,
        crate::modules::user::adapter::incoming::web::routes::get_user::get_user_handler,
        crate::modules::user::adapter::incoming::web::routes::update_user::update_user_handler,
        crate::modules::user::adapter::incoming::web::routes::delete_user::delete_user_handler,
    ),
    components(schemas(UserRequest, UserResponse, ApiResponse, ApiError)),
    tags(
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
