use async_trait::async_trait;
use tracing::info;

use crate::modules::user::application::{
    domain::entities::{NewUser, User},
    ports::{
        incoming::use_cases::{CreateUserError, CreateUserUseCase},
        outgoing::UserRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> CreateUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository,
{
    async fn execute(&self, data: NewUser) -> Result<User, CreateUserError> {
        let user = self
            .repository
            .create(data)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }
}
