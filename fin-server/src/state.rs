use crate::config::PlaidRouting;

use fin_auth::JwtValidator;
use fin_plaid::PlaidClient;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub plaid: Arc<PlaidClient>,
    pub plaid_routing: Arc<PlaidRouting>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        jwt_validator: JwtValidator,
        plaid_routing: PlaidRouting,
    ) -> Self {
        Self {
            pool,
            jwt_validator: Arc::new(jwt_validator),
            plaid: Arc::new(PlaidClient::new()),
            plaid_routing: Arc::new(plaid_routing),
        }
    }
}
