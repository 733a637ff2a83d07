use fin_core::UserProfile;

use serde::Serialize;

/// User DTO for the admin listing: a profile joined with its email from
/// the auth subsystem. `email` is null when the join degraded.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub approval_status: String,
    pub is_test_user: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserDto {
    pub fn from_profile(profile: UserProfile, email: Option<String>) -> Self {
        Self {
            id: profile.id.to_string(),
            display_name: profile.display_name,
            email,
            approval_status: profile.approval_status.to_string(),
            is_test_user: profile.is_test_user,
            created_at: profile.created_at.timestamp(),
            updated_at: profile.updated_at.timestamp(),
        }
    }
}
