use crate::modules::user::application::domain::entities::User;
use crate::shared::repository::Repository;

/// Full capability set over [`User`] rows.
pub trait UserRepository: Repository<User> {}

impl<R> UserRepository for R where R: Repository<User> {}
