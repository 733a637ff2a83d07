//! Profile repository - reads and the two admin-triggered mutations.
//!
//! Profiles are created on signup outside this system, so there is no
//! `create` here. The only writes are the approval decision and the
//! privileged delete, which removes the user together with dependent rows.

use crate::{DbError, Result as DbErrorResult};

use fin_core::{ApprovalDecision, ApprovalStatus, UserProfile};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All profiles, newest signup first. Id is a stable tiebreak so the
    /// listing order does not shuffle between refreshes.
    pub async fn find_all(&self) -> DbErrorResult<Vec<UserProfile>> {
        let rows = sqlx::query(
            r#"
                SELECT id, display_name, approval_status, is_test_user,
                    created_at, updated_at
                FROM profiles
                ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_profile_row).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserProfile>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, display_name, approval_status, is_test_user,
                    created_at, updated_at
                FROM profiles
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_profile_row).transpose()
    }

    /// Apply an admin approval decision to one profile.
    ///
    /// The decision type only carries `approved` and `rejected`, so no
    /// other status string can reach this statement. Returns `false` when
    /// no profile matched.
    pub async fn set_approval(
        &self,
        id: Uuid,
        decision: ApprovalDecision,
    ) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let status = decision.as_status().as_str();
        let updated_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE profiles
                SET approval_status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(status)
        .bind(updated_at)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Sandbox-routing flag for one user. `None` when the profile does
    /// not exist.
    pub async fn is_test_user(&self, id: Uuid) -> DbErrorResult<Option<bool>> {
        let id_str = id.to_string();

        let row = sqlx::query("SELECT is_test_user FROM profiles WHERE id = ?")
            .bind(id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Ok(r.try_get::<i64, _>("is_test_user")? != 0))
            .transpose()
    }

    /// Privileged deletion of a user and its dependent rows.
    ///
    /// Runs in one transaction: role grants, the profile, and the auth
    /// subsystem row all go together. Returns `false` when the user did
    /// not exist.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_roles WHERE user_id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM auth_users WHERE id = ?")
            .bind(&id_str)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn map_profile_row(row: &SqliteRow) -> DbErrorResult<UserProfile> {
    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str).map_err(|e| DbError::Corrupt {
        message: format!("Invalid UUID in profiles.id: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let status_str: String = row.try_get("approval_status")?;
    let approval_status = ApprovalStatus::from_str(&status_str).map_err(|e| DbError::Corrupt {
        message: format!("Invalid status in profiles.approval_status: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let created_at = timestamp_column(row, "created_at")?;
    let updated_at = timestamp_column(row, "updated_at")?;

    Ok(UserProfile {
        id,
        display_name: row.try_get("display_name")?,
        approval_status,
        is_test_user: row.try_get::<i64, _>("is_test_user")? != 0,
        created_at,
        updated_at,
    })
}

#[track_caller]
fn timestamp_column(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let secs: i64 = row.try_get(column)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Corrupt {
        message: format!("Invalid timestamp in profiles.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
