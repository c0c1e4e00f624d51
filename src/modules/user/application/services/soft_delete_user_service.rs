use async_trait::async_trait;
use tracing::info;

use crate::modules::user::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{SoftDeleteUserError, SoftDeleteUserUseCase},
        outgoing::{RepositoryError, UserRepository},
    },
};

#[derive(Debug, Clone)]
pub struct SoftDeleteUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> SoftDeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SoftDeleteUserUseCase for SoftDeleteUserService<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<(), SoftDeleteUserError> {
        // A missing record must surface here, the delete itself never reports it
        let user = self
            .repository
            .get_by_id(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SoftDeleteUserError::UserNotFound,
                other => SoftDeleteUserError::RepositoryError(other.to_string()),
            })?;

        self.repository
            .delete(&user)
            .await
            .map_err(|e| SoftDeleteUserError::RepositoryError(e.to_string()))?;

        info!(user_id = %user_id, "User soft-deleted");
        Ok(())
    }
}
