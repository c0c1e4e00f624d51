use async_trait::async_trait;
use mockall::mock;

use crate::modules::user::application::domain::entities::{NewUser, User, UserId};
use crate::modules::user::application::ports::outgoing::{
    Creatable, Deletable, Readable, RepositoryError, Updatable,
};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl Creatable<User> for UserRepo {
        async fn create(&self, draft: NewUser) -> Result<User, RepositoryError>;
    }

    #[async_trait]
    impl Readable<User> for UserRepo {
        async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError>;
    }

    #[async_trait]
    impl Updatable<User> for UserRepo {
        async fn update(&self, id: UserId, draft: NewUser) -> Result<User, RepositoryError>;
    }

    #[async_trait]
    impl Deletable<User> for UserRepo {
        async fn delete(&self, record: &User) -> Result<(), RepositoryError>;
    }
}
