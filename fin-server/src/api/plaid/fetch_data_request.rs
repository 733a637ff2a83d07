use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FetchDataRequest {
    pub access_token: String,

    /// Transaction window in days (default 30)
    #[serde(default)]
    pub days_back: Option<i64>,

    /// Maximum number of transactions to return (default 100)
    #[serde(default)]
    pub max_transactions: Option<i64>,
}
