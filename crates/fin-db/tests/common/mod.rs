pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_profile, grant_role, insert_profile};
pub use test_db::create_test_pool;
