pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::account_kind::AccountKind;
pub use models::approval_status::{ApprovalDecision, ApprovalStatus};
pub use models::role::Role;
pub use models::user_profile::UserProfile;

#[cfg(test)]
mod tests;
