pub mod auth_user_repository;
pub mod profile_repository;
pub mod role_repository;
