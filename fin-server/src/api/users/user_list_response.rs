use crate::api::users::user_dto::UserDto;
use serde::Serialize;

/// List of users response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}
