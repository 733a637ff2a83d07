use crate::AccountKind;

#[test]
fn test_liability_types() {
    assert_eq!(
        AccountKind::from_account_type("credit"),
        AccountKind::Liability
    );
    assert_eq!(
        AccountKind::from_account_type("loan"),
        AccountKind::Liability
    );
}

#[test]
fn test_asset_types() {
    assert_eq!(
        AccountKind::from_account_type("depository"),
        AccountKind::Asset
    );
    assert_eq!(
        AccountKind::from_account_type("investment"),
        AccountKind::Asset
    );
    assert_eq!(
        AccountKind::from_account_type("brokerage"),
        AccountKind::Asset
    );
}

#[test]
fn test_unknown_type_defaults_to_asset() {
    assert_eq!(
        AccountKind::from_account_type("cryptocurrency"),
        AccountKind::Asset
    );
    assert_eq!(AccountKind::from_account_type(""), AccountKind::Asset);
}
