use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, GetUserUseCase, SoftDeleteUserUseCase, UpdateUserUseCase,
};
use crate::modules::user::application::user_use_cases::UserUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
    get_user: Arc<dyn GetUserUseCase + Send + Sync>,
    update_user: Arc<dyn UpdateUserUseCase + Send + Sync>,
    soft_delete_user: Arc<dyn SoftDeleteUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_user: Arc::new(StubCreateUserUseCase),
            get_user: Arc::new(StubGetUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            soft_delete_user: Arc::new(StubSoftDeleteUserUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.get_user = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.update_user = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_user(
        mut self,
        uc: impl SoftDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.soft_delete_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user_use_cases: UserUseCases {
                create: self.create_user,
                get: self.get_user,
                update: self.update_user,
                soft_delete: self.soft_delete_user,
            },
        })
    }
}
