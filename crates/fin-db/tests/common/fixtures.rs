#![allow(dead_code)]

use fin_core::{Role, UserProfile};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test UserProfile with sensible defaults
pub fn create_test_profile(display_name: &str) -> UserProfile {
    UserProfile::new(Uuid::new_v4(), display_name.to_string())
}

/// Inserts a profile together with its auth subsystem row
pub async fn insert_profile(pool: &SqlitePool, profile: &UserProfile, email: Option<&str>) {
    let id = profile.id.to_string();
    let created_at = profile.created_at.timestamp();
    let updated_at = profile.updated_at.timestamp();

    sqlx::query("INSERT INTO auth_users (id, email, created_at) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(email)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to insert auth user");

    sqlx::query(
        r#"
            INSERT INTO profiles (id, display_name, approval_status, is_test_user,
                created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&profile.display_name)
    .bind(profile.approval_status.as_str())
    .bind(profile.is_test_user as i64)
    .bind(created_at)
    .bind(updated_at)
    .execute(pool)
    .await
    .expect("Failed to insert profile");
}

/// Grants a role to an existing user
pub async fn grant_role(pool: &SqlitePool, user_id: Uuid, role: Role) {
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
        .bind(user_id.to_string())
        .bind(role.as_str())
        .execute(pool)
        .await
        .expect("Failed to grant role");
}
