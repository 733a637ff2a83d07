//! Auth subsystem reads.
//!
//! Emails live on the auth side, not on profiles. The listing joins them
//! in through this repository and degrades to email-less profiles when
//! the lookup fails, so a broken auth table never takes the user list
//! down with it.

use crate::Result as DbErrorResult;

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AuthUserRepository {
    pool: SqlitePool,
}

impl AuthUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All known user emails keyed by user id. Rows with no email or an
    /// unparseable id are skipped rather than failing the whole map.
    pub async fn find_emails(&self) -> DbErrorResult<HashMap<Uuid, String>> {
        let rows = sqlx::query("SELECT id, email FROM auth_users WHERE email IS NOT NULL")
            .fetch_all(&self.pool)
            .await?;

        let mut emails = HashMap::with_capacity(rows.len());
        for row in rows {
            let id_str: String = row.try_get("id")?;
            let Ok(id) = Uuid::parse_str(&id_str) else {
                log::warn!("Skipping auth user with invalid id: {}", id_str);
                continue;
            };
            emails.insert(id, row.try_get("email")?);
        }

        Ok(emails)
    }

    pub async fn find_email(&self, user_id: Uuid) -> DbErrorResult<Option<String>> {
        let id_str = user_id.to_string();

        let row = sqlx::query("SELECT email FROM auth_users WHERE id = ?")
            .bind(id_str)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.and_then(|r| r.try_get("email").ok()))
    }
}
