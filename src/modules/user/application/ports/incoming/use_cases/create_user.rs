use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{NewUser, User};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, data: NewUser) -> Result<User, CreateUserError>;
}
