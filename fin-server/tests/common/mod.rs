#![allow(dead_code)]

//! Test infrastructure for fin-server API tests

use fin_auth::JwtValidator;
use fin_server::{AppState, PlaidRouting};

use fin_core::Role;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/fin-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, with no Plaid credentials configured
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_routing(PlaidRouting::new(None, None)).await
}

/// Create AppState for testing with explicit Plaid routing
pub async fn create_test_app_state_with_routing(routing: PlaidRouting) -> AppState {
    let pool = create_test_pool().await;

    AppState::new(pool, JwtValidator::with_hs256(TEST_JWT_SECRET), routing)
}

/// Create a test user (auth row + profile)
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid, email: Option<&str>) {
    create_test_user_at(pool, user_id, email, chrono::Utc::now().timestamp()).await;
}

/// Create a test user with an explicit signup timestamp
pub async fn create_test_user_at(
    pool: &SqlitePool,
    user_id: Uuid,
    email: Option<&str>,
    created_at: i64,
) {
    let id = user_id.to_string();

    sqlx::query("INSERT INTO auth_users (id, email, created_at) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(email)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to create auth user");

    sqlx::query(
        r#"
            INSERT INTO profiles (id, display_name, approval_status, is_test_user,
                created_at, updated_at)
            VALUES (?, ?, 'pending', 0, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(format!("User {}", &id[..8]))
    .bind(created_at)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to create profile");
}

/// Grant a role to a test user
pub async fn grant_role(pool: &SqlitePool, user_id: Uuid, role: Role) {
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
        .bind(user_id.to_string())
        .bind(role.as_str())
        .execute(pool)
        .await
        .expect("Failed to grant role");
}

/// Flag a test user for sandbox routing
pub async fn mark_test_user(pool: &SqlitePool, user_id: Uuid) {
    sqlx::query("UPDATE profiles SET is_test_user = 1 WHERE id = ?")
        .bind(user_id.to_string())
        .execute(pool)
        .await
        .expect("Failed to flag test user");
}

/// Mint a bearer token for a user, signed with the test secret
pub fn bearer_for(user_id: Uuid) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    let claims = fin_auth::Claims {
        sub: user_id.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to mint test token");

    format!("Bearer {}", token)
}
