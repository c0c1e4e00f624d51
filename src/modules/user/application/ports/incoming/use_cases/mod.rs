mod create_user;
mod get_user;
mod soft_delete_user;
mod update_user;

pub use create_user::{CreateUserError, CreateUserUseCase};
pub use get_user::{GetUserError, GetUserUseCase};
pub use soft_delete_user::{SoftDeleteUserError, SoftDeleteUserUseCase};
pub use update_user::{UpdateUserError, UpdateUserUseCase};
