use serde::{Deserialize, Serialize};

/// Balance-sheet side of a bank account, derived from the provider's
/// account type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Asset,
    Liability,
}

impl AccountKind {
    /// Classify a provider account type. Unknown types count as assets.
    pub fn from_account_type(account_type: &str) -> Self {
        match account_type {
            "credit" | "loan" => Self::Liability,
            "depository" | "investment" | "brokerage" | "other" => Self::Asset,
            _ => Self::Asset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
