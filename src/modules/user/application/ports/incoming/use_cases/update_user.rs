use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{NewUser, User, UserId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Replaces username and email of a live user. The id always comes from
/// the caller, never from the payload.
#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, data: NewUser) -> Result<User, UpdateUserError>;
}
