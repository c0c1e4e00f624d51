mod user_repository;

pub use user_repository::UserRepository;
pub use crate::shared::repository::{
    Creatable, Deletable, Readable, Repository, RepositoryError, Updatable,
};
