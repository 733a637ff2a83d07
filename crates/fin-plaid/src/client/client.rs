use crate::client::error::{PlaidError, Result as PlaidClientResult};
use crate::credentials::PlaidCredentials;
use crate::models::{Account, FinancialData, LinkTokenCreate, TokenExchange, Transaction};

use std::panic::Location;

use chrono::{Duration, NaiveDate, Utc};
use error_location::ErrorLocation;
use log::warn;
use reqwest::Client as ReqwestClient;
use serde_json::{Value, json};

/// Widened date range for the single transactions retry, in days.
const WIDE_RETRY_DAYS: i64 = 730;

/// Client name shown in the Plaid Link dialog
const CLIENT_NAME: &str = "finboard";

/// HTTP client for the Plaid REST API.
///
/// Every operation is one POST carrying the server-held credentials plus
/// caller-supplied identifiers; the caller never supplies secrets. No
/// operation retries except the documented widen-and-retry inside
/// [`fetch_financial_data`](Self::fetch_financial_data).
pub struct PlaidClient {
    http: ReqwestClient,
}

impl PlaidClient {
    pub fn new() -> Self {
        Self {
            http: ReqwestClient::new(),
        }
    }

    /// POST to a Plaid endpoint with credentials merged into the body,
    /// returning the parsed payload or a passthrough-ready error.
    async fn post(
        &self,
        credentials: &PlaidCredentials,
        path: &str,
        mut body: Value,
    ) -> PlaidClientResult<Value> {
        if let Value::Object(payload) = &mut body {
            payload.insert("client_id".into(), json!(credentials.client_id));
            payload.insert("secret".into(), json!(credentials.secret));
        }

        let url = format!("{}{}", credentials.base_url, path);
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &value, text));
        }

        // A structured error payload can arrive under a success status;
        // it still has to surface as a client error.
        if let Some(code) = error_code(&value) {
            let code = code.to_string();
            return Err(api_error_with_code(400, code, &value, text));
        }

        Ok(value)
    }

    /// Create a link token for starting (or, with an access token,
    /// updating) a bank connection.
    pub async fn create_link_token(
        &self,
        credentials: &PlaidCredentials,
        user_id: &str,
        access_token: Option<&str>,
    ) -> PlaidClientResult<LinkTokenCreate> {
        let mut body = json!({
            "client_name": CLIENT_NAME,
            "language": "en",
            "country_codes": ["US"],
            "user": { "client_user_id": user_id },
        });

        // Update mode reuses the existing item and must not request products
        match access_token {
            Some(token) => {
                body["access_token"] = json!(token);
            }
            None => {
                body["products"] = json!(["transactions"]);
            }
        }

        let value = self.post(credentials, "/link/token/create", body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Exchange a single-use public token for a long-lived access token
    pub async fn exchange_public_token(
        &self,
        credentials: &PlaidCredentials,
        public_token: &str,
    ) -> PlaidClientResult<TokenExchange> {
        let body = json!({ "public_token": public_token });

        let value = self
            .post(credentials, "/item/public_token/exchange", body)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_accounts(
        &self,
        credentials: &PlaidCredentials,
        access_token: &str,
    ) -> PlaidClientResult<Vec<Account>> {
        let body = json!({ "access_token": access_token });

        let value = self.post(credentials, "/accounts/get", body).await?;
        Ok(serde_json::from_value(value["accounts"].clone())?)
    }

    pub async fn get_transactions(
        &self,
        credentials: &PlaidCredentials,
        access_token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        count: i64,
    ) -> PlaidClientResult<Vec<Transaction>> {
        let body = json!({
            "access_token": access_token,
            "start_date": start_date.format("%Y-%m-%d").to_string(),
            "end_date": end_date.format("%Y-%m-%d").to_string(),
            "options": { "count": count },
        });

        let value = self.post(credentials, "/transactions/get", body).await?;
        Ok(serde_json::from_value(value["transactions"].clone())?)
    }

    /// Fetch accounts and transactions for one connection.
    ///
    /// Accounts failure is fatal and passes through. A transactions
    /// failure gets exactly one retry over a 730-day window; when that
    /// also fails the accounts are still returned with an empty
    /// transaction list and the error note in `warning`.
    pub async fn fetch_financial_data(
        &self,
        credentials: &PlaidCredentials,
        access_token: &str,
        days_back: i64,
        max_transactions: i64,
    ) -> PlaidClientResult<FinancialData> {
        let accounts = self.get_accounts(credentials, access_token).await?;

        let end_date = Utc::now().date_naive();
        let start_date = end_date - Duration::days(days_back);

        let transactions = match self
            .get_transactions(credentials, access_token, start_date, end_date, max_transactions)
            .await
        {
            Ok(transactions) => transactions,
            Err(first) => {
                warn!(
                    "Transactions fetch failed over {} days, retrying with {}: {}",
                    days_back, WIDE_RETRY_DAYS, first
                );

                let wide_start = end_date - Duration::days(WIDE_RETRY_DAYS);
                match self
                    .get_transactions(
                        credentials,
                        access_token,
                        wide_start,
                        end_date,
                        max_transactions,
                    )
                    .await
                {
                    Ok(transactions) => transactions,
                    Err(retry) => {
                        warn!("Widened transactions retry failed: {}", retry);
                        return Ok(FinancialData {
                            accounts,
                            transactions: Vec::new(),
                            warning: Some(format!("Transactions unavailable: {}", retry)),
                        });
                    }
                }
            }
        };

        Ok(FinancialData {
            accounts,
            transactions,
            warning: None,
        })
    }
}

impl Default for PlaidClient {
    fn default() -> Self {
        Self::new()
    }
}

fn error_code(value: &Value) -> Option<&str> {
    value
        .get("error_code")
        .and_then(|v| v.as_str())
        .filter(|code| !code.is_empty())
}

#[track_caller]
fn api_error(status: u16, value: &Value, body: String) -> PlaidError {
    let code = error_code(value).unwrap_or("UPSTREAM_ERROR").to_string();
    api_error_with_code(status, code, value, body)
}

#[track_caller]
fn api_error_with_code(status: u16, code: String, value: &Value, body: String) -> PlaidError {
    let message = value
        .get("display_message")
        .and_then(|v| v.as_str())
        .filter(|m| !m.is_empty())
        .or_else(|| value.get("error_message").and_then(|v| v.as_str()))
        .unwrap_or("Upstream request failed")
        .to_string();

    PlaidError::Api {
        status,
        code,
        message,
        body,
        location: ErrorLocation::from(Location::caller()),
    }
}
