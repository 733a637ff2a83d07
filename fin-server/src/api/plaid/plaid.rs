//! Plaid proxy handlers
//!
//! Thin stateless passthroughs: resolve credentials from process config,
//! make one upstream call (plus the documented transactions retry inside
//! the client), and reshape the payload down to what callers consume.
//! Pre-flight OPTIONS requests are answered by the CORS layer and never
//! reach these functions.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::plaid::account_dto::AccountDto;
use crate::api::plaid::create_link_token_request::CreateLinkTokenRequest;
use crate::api::plaid::exchange_token_request::ExchangeTokenRequest;
use crate::api::plaid::exchange_token_response::ExchangeTokenResponse;
use crate::api::plaid::fetch_data_request::FetchDataRequest;
use crate::api::plaid::fetch_data_response::{FetchDataResponse, FetchMetadata};
use crate::api::plaid::link_token_response::LinkTokenResponse;
use crate::state::AppState;

use fin_db::ProfileRepository;
use fin_plaid::{PlaidCredentials, PlaidEnvironment};

use axum::{Json, extract::State};
use uuid::Uuid;

const DEFAULT_DAYS_BACK: i64 = 30;
const DEFAULT_MAX_TRANSACTIONS: i64 = 100;

/// Fail fast when the resolved environment has no credential pair; the
/// upstream is never called without credentials.
fn resolve_credentials(
    state: &AppState,
    environment: PlaidEnvironment,
) -> ApiResult<PlaidCredentials> {
    state
        .plaid_routing
        .resolve(environment)
        .cloned()
        .ok_or_else(ApiError::not_configured)
}

/// Sandbox for flagged test users, production for everyone else.
/// An unknown user or a failed flag lookup routes to production.
async fn environment_for_user(state: &AppState, user_id: Uuid) -> PlaidEnvironment {
    let repo = ProfileRepository::new(state.pool.clone());

    match repo.is_test_user(user_id).await {
        Ok(Some(true)) => PlaidEnvironment::Sandbox,
        Ok(Some(false)) => PlaidEnvironment::Production,
        Ok(None) => {
            log::warn!("No profile for user {}, routing to production", user_id);
            PlaidEnvironment::Production
        }
        Err(e) => {
            log::warn!(
                "Test-user lookup failed for {}, routing to production: {}",
                user_id,
                e
            );
            PlaidEnvironment::Production
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/plaid/link-token
///
/// Create a link token, routed to sandbox or production by the
/// requesting user's test flag. This is the only per-user environment
/// decision in the proxy surface.
pub async fn create_link_token(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkTokenRequest>,
) -> ApiResult<Json<LinkTokenResponse>> {
    let user_id = Uuid::parse_str(&request.user_id)?;

    let environment = environment_for_user(&state, user_id).await;
    let credentials = resolve_credentials(&state, environment)?;

    log::info!(
        "Creating link token for user {} in {}",
        user_id,
        environment
    );

    let created = state
        .plaid
        .create_link_token(
            &credentials,
            &request.user_id,
            request.access_token.as_deref(),
        )
        .await?;

    Ok(Json(LinkTokenResponse {
        link_token: created.link_token,
    }))
}

/// POST /api/v1/plaid/exchange
///
/// Exchange a single-use public token for a long-lived access token
pub async fn exchange_token(
    State(state): State<AppState>,
    Json(request): Json<ExchangeTokenRequest>,
) -> ApiResult<Json<ExchangeTokenResponse>> {
    let credentials = resolve_credentials(&state, PlaidEnvironment::Production)?;

    let exchanged = state
        .plaid
        .exchange_public_token(&credentials, &request.public_token)
        .await?;

    Ok(Json(ExchangeTokenResponse {
        access_token: exchanged.access_token,
        item_id: exchanged.item_id,
    }))
}

/// POST /api/v1/plaid/transactions
///
/// Fetch accounts and transactions for one connection. Transactions
/// degrade to an empty list with an error note when both attempts fail;
/// accounts failure is the only hard error.
pub async fn fetch_data(
    State(state): State<AppState>,
    Json(request): Json<FetchDataRequest>,
) -> ApiResult<Json<FetchDataResponse>> {
    let credentials = resolve_credentials(&state, PlaidEnvironment::Production)?;

    let days_back = request.days_back.unwrap_or(DEFAULT_DAYS_BACK);
    let max_transactions = request
        .max_transactions
        .unwrap_or(DEFAULT_MAX_TRANSACTIONS);

    let data = state
        .plaid
        .fetch_financial_data(&credentials, &request.access_token, days_back, max_transactions)
        .await?;

    let metadata = FetchMetadata {
        account_count: data.accounts.len(),
        transaction_count: data.transactions.len(),
        days_requested: days_back,
        fetched_at: chrono::Utc::now().to_rfc3339(),
        transactions_error: data.warning,
    };

    Ok(Json(FetchDataResponse {
        accounts: data.accounts.into_iter().map(AccountDto::from).collect(),
        transactions: data.transactions,
        metadata,
    }))
}
