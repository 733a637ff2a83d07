use crate::{ApprovalStatus, UserProfile};

use uuid::Uuid;

#[test]
fn test_user_profile_new() {
    let id = Uuid::new_v4();
    let profile = UserProfile::new(id, "Ada Lovelace".to_string());

    assert_eq!(profile.id, id);
    assert_eq!(profile.display_name, "Ada Lovelace");
    assert_eq!(profile.approval_status, ApprovalStatus::Pending);
    assert!(!profile.is_test_user);
    assert!(!profile.is_approved());
}

#[test]
fn test_user_profile_is_approved() {
    let mut profile = UserProfile::new(Uuid::new_v4(), "Test".to_string());

    profile.approval_status = ApprovalStatus::Approved;
    assert!(profile.is_approved());

    profile.approval_status = ApprovalStatus::Rejected;
    assert!(!profile.is_approved());
}
