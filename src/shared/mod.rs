pub mod api;
pub mod repository;
