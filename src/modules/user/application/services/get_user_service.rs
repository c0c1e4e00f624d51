use async_trait::async_trait;

use crate::modules::user::application::{
    domain::entities::{User, UserId},
    ports::{
        incoming::use_cases::{GetUserError, GetUserUseCase},
        outgoing::{RepositoryError, UserRepository},
    },
};

#[derive(Debug, Clone)]
pub struct GetUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> GetUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUserUseCase for GetUserService<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<User, GetUserError> {
        self.repository
            .get_by_id(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GetUserError::UserNotFound,
                other => GetUserError::RepositoryError(other.to_string()),
            })
    }
}
