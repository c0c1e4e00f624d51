use std::sync::Arc;

use crate::modules::user::application::{
    ports::{
        incoming::use_cases::{
            CreateUserUseCase, GetUserUseCase, SoftDeleteUserUseCase, UpdateUserUseCase,
        },
        outgoing::UserRepository,
    },
    services::{CreateUserService, GetUserService, SoftDeleteUserService, UpdateUserService},
};

#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteUserUseCase + Send + Sync>,
}

impl UserUseCases {
    /// Wires every use case to the same repository.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: UserRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateUserService::new(repository.clone())),
            get: Arc::new(GetUserService::new(repository.clone())),
            update: Arc::new(UpdateUserService::new(repository.clone())),
            soft_delete: Arc::new(SoftDeleteUserService::new(repository)),
        }
    }
}
