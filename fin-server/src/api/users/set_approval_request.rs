use fin_core::ApprovalDecision;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetApprovalRequest {
    /// The admin decision; only `approved` and `rejected` deserialize
    pub status: ApprovalDecision,
}
