use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExchangeTokenResponse {
    pub access_token: String,
    pub item_id: String,
}
