use async_trait::async_trait;

use crate::modules::user::application::{
    domain::entities::{NewUser, User, UserId},
    ports::{
        incoming::use_cases::{UpdateUserError, UpdateUserUseCase},
        outgoing::{RepositoryError, UserRepository},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserUseCase for UpdateUserService<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId, data: NewUser) -> Result<User, UpdateUserError> {
        self.repository
            .update(user_id, data)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}
