use crate::{ApprovalDecision, ApprovalStatus};

use std::str::FromStr;

#[test]
fn test_approval_status_as_str() {
    assert_eq!(ApprovalStatus::Pending.as_str(), "pending");
    assert_eq!(ApprovalStatus::Approved.as_str(), "approved");
    assert_eq!(ApprovalStatus::Rejected.as_str(), "rejected");
}

#[test]
fn test_approval_status_from_str() {
    assert_eq!(
        ApprovalStatus::from_str("pending").unwrap(),
        ApprovalStatus::Pending
    );
    assert_eq!(
        ApprovalStatus::from_str("approved").unwrap(),
        ApprovalStatus::Approved
    );
    assert_eq!(
        ApprovalStatus::from_str("rejected").unwrap(),
        ApprovalStatus::Rejected
    );
    assert!(ApprovalStatus::from_str("banned").is_err());
}

#[test]
fn test_approval_status_default_is_pending() {
    assert_eq!(ApprovalStatus::default(), ApprovalStatus::Pending);
}

#[test]
fn test_decision_maps_to_status() {
    assert_eq!(
        ApprovalDecision::Approved.as_status(),
        ApprovalStatus::Approved
    );
    assert_eq!(
        ApprovalDecision::Rejected.as_status(),
        ApprovalStatus::Rejected
    );
}

#[test]
fn test_decision_rejects_pending() {
    // The decision type only admits the two admin-writable values
    let parsed: Result<ApprovalDecision, _> = serde_json::from_str("\"pending\"");
    assert!(parsed.is_err());

    let parsed: Result<ApprovalDecision, _> = serde_json::from_str("\"approved\"");
    assert_eq!(parsed.unwrap(), ApprovalDecision::Approved);
}
