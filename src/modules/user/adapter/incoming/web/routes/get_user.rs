use actix_web::{get, web, HttpResponse};

use crate::{
    modules::user::{
        adapter::incoming::web::{error::UserApiError, routes::dto::UserResponse},
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Fetch a live user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Id is not a decimal unsigned integer", body = ApiResponse),
        (status = 404, description = "No live user with this id", body = ApiResponse),
        (status = 500, description = "Storage failure", body = ApiResponse)
    )
)]
#[get("/users/{id}")]
pub async fn get_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, UserApiError> {
    let user_id: UserId = path.into_inner().parse()?;

    let user = data.user_use_cases.get.execute(user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use crate::modules::user::application::{
        domain::entities::User,
        ports::incoming::use_cases::{GetUserError, GetUserUseCase},
    };
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, fixtures::sample_user};

    #[derive(Clone)]
    struct MockGetUserUseCase {
        result: Result<User, GetUserError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockGetUserUseCase {
        fn returning(result: Result<User, GetUserError>) -> Self {
            Self {
                result,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl GetUserUseCase for MockGetUserUseCase {
        async fn execute(&self, _user_id: UserId) -> Result<User, GetUserError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn get_user_success_returns_record() {
        let state = TestAppStateBuilder::default()
            .with_get_user(MockGetUserUseCase::returning(Ok(sample_user(
                1, "alice", "a@x.com",
            ))))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_user_handler)).await;

        let req = test::TestRequest::get().uri("/users/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "a@x.com");
    }

    #[actix_web::test]
    async fn get_user_not_found_returns_404() {
        let state = TestAppStateBuilder::default()
            .with_get_user(MockGetUserUseCase::returning(Err(GetUserError::UserNotFound)))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_user_handler)).await;

        let req = test::TestRequest::get().uri("/users/42").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn get_user_non_numeric_id_never_reaches_use_case() {
        let use_case = MockGetUserUseCase::returning(Ok(sample_user(1, "alice", "a@x.com")));
        let calls = Arc::clone(&use_case.calls);

        let state = TestAppStateBuilder::default().with_get_user(use_case).build();

        let app =
            test::init_service(App::new().app_data(state).service(get_user_handler)).await;

        for uri in ["/users/abc", "/users/-1", "/users/1.5"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
            let json = read_json(resp).await;
            assert_eq!(json["error"]["code"], "INVALID_USER_ID");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn get_user_storage_failure_returns_500() {
        let state = TestAppStateBuilder::default()
            .with_get_user(MockGetUserUseCase::returning(Err(
                GetUserError::RepositoryError("connection reset".into()),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_user_handler)).await;

        let req = test::TestRequest::get().uri("/users/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
