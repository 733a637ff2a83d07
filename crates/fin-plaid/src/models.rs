//! Passthrough records from the Plaid API.
//!
//! Only the fields callers actually consume are declared; everything else
//! in the upstream payload is dropped on deserialization, which is what
//! narrows the proxied responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LinkTokenCreate {
    pub link_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchange {
    pub access_token: String,
    pub item_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalances {
    pub available: Option<f64>,
    pub current: Option<f64>,
    #[serde(default)]
    pub limit: Option<f64>,
    #[serde(default)]
    pub iso_currency_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub name: String,
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub balances: AccountBalances,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: String,
    pub name: String,
    #[serde(default)]
    pub merchant_name: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: Option<Vec<String>>,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub iso_currency_code: Option<String>,
}

/// Result of the combined accounts + transactions fetch.
///
/// `warning` distinguishes "succeeded with caveats" from hard failure:
/// when both transaction attempts fail the accounts still come back with
/// an empty transaction list and the note set, never a top-level error.
#[derive(Debug, Clone)]
pub struct FinancialData {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub warning: Option<String>,
}
