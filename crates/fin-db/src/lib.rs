pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::auth_user_repository::AuthUserRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::role_repository::RoleRepository;
