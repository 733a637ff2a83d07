use crate::api::plaid::plaid;
use crate::api::users::users;
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admin user management
        .route("/api/v1/users", get(users::list_users))
        .route("/api/v1/users/{id}/approval", put(users::set_approval))
        .route("/api/v1/users/{id}", delete(users::delete_user))
        // Plaid proxy endpoints
        .route("/api/v1/plaid/link-token", post(plaid::create_link_token))
        .route("/api/v1/plaid/exchange", post(plaid::exchange_token))
        .route("/api/v1/plaid/transactions", post(plaid::fetch_data))
        // Add shared state
        .with_state(state)
        // CORS middleware answers pre-flight before any handler runs
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
