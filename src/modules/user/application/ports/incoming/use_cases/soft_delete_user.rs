use async_trait::async_trait;

use crate::modules::user::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SoftDeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), SoftDeleteUserError>;
}
