//! Role repository - the single point lookup behind the admin gate.

use crate::{DbError, Result as DbErrorResult};

use fin_core::Role;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Role for one user, `None` when no grant exists. Callers gating on
    /// admin must treat `None` and `Some(Role::User)` identically.
    pub async fn find_role(&self, user_id: Uuid) -> DbErrorResult<Option<Role>> {
        let id_str = user_id.to_string();

        let row = sqlx::query("SELECT role FROM user_roles WHERE user_id = ?")
            .bind(id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| {
            let role_str: String = r.try_get("role")?;
            Role::from_str(&role_str).map_err(|e| DbError::Corrupt {
                message: format!("Invalid role in user_roles.role: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }
}
