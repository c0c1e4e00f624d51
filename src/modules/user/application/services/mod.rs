mod create_user_service;
mod get_user_service;
mod soft_delete_user_service;
mod update_user_service;

pub use create_user_service::CreateUserService;
pub use get_user_service::GetUserService;
pub use soft_delete_user_service::SoftDeleteUserService;
pub use update_user_service::UpdateUserService;
