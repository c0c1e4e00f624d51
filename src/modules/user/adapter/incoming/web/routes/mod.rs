pub mod create_user;
pub mod delete_user;
pub mod dto;
pub mod get_user;
pub mod update_user;

pub use create_user::create_user_handler;
pub use delete_user::delete_user_handler;
pub use get_user::get_user_handler;
pub use update_user::update_user_handler;
