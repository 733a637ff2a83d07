use fin_core::AccountKind;
use fin_plaid::Account;

use serde::Serialize;

/// An account as proxied to clients: the passthrough record plus its
/// balance-sheet classification.
#[derive(Debug, Serialize)]
pub struct AccountDto {
    #[serde(flatten)]
    pub account: Account,
    pub kind: AccountKind,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        let kind = AccountKind::from_account_type(&account.account_type);
        Self { account, kind }
    }
}
