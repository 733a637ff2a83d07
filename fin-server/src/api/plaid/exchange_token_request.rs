use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExchangeTokenRequest {
    /// Single-use token handed back by the Link flow
    pub public_token: String,
}
