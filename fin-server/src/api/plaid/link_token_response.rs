use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LinkTokenResponse {
    pub link_token: String,
}
