use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateLinkTokenRequest {
    /// The requesting user; decides sandbox vs production routing
    pub user_id: String,

    /// Present for update mode on an existing bank connection
    #[serde(default)]
    pub access_token: Option<String>,
}
