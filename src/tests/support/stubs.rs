use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{NewUser, User, UserId};
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserError, CreateUserUseCase, GetUserError, GetUserUseCase, SoftDeleteUserError,
    SoftDeleteUserUseCase, UpdateUserError, UpdateUserUseCase,
};

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _data: NewUser) -> Result<User, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserUseCase;

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<User, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _user_id: UserId, _data: NewUser) -> Result<User, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteUserUseCase;

#[async_trait]
impl SoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), SoftDeleteUserError> {
        unimplemented!("Not used in this test")
    }
}
