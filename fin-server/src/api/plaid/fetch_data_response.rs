use crate::api::plaid::account_dto::AccountDto;

use fin_plaid::Transaction;

use serde::Serialize;

/// Combined accounts + transactions payload.
///
/// Always status 200 once the accounts fetch succeeded:
/// `metadata.transactions_error` carries the note when both transaction
/// attempts failed and the list degraded to empty.
#[derive(Debug, Serialize)]
pub struct FetchDataResponse {
    pub accounts: Vec<AccountDto>,
    pub transactions: Vec<Transaction>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Serialize)]
pub struct FetchMetadata {
    pub account_count: usize,
    pub transaction_count: usize,
    pub days_requested: i64,
    pub fetched_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions_error: Option<String>,
}
