//! User profile entity - the approval-gated identity record.

use crate::ApprovalStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user profile row. Created on signup (outside this system), mutated
/// only by the admin approval action, and removed only through the
/// privileged delete workflow.
///
/// Email is intentionally absent: it lives in the auth subsystem and is
/// joined in at listing time, so a failed email lookup can degrade to a
/// profile without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub display_name: String,
    pub approval_status: ApprovalStatus,
    /// Routes this user's bank connections to the sandbox environment
    pub is_test_user: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new pending profile with default values
    pub fn new(id: Uuid, display_name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            display_name,
            approval_status: ApprovalStatus::Pending,
            is_test_user: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }
}
