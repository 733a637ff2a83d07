pub mod client;
pub mod credentials;
pub mod environment;
pub mod models;

pub use client::{PlaidClient, PlaidError, Result as PlaidClientResult};
pub use credentials::PlaidCredentials;
pub use environment::PlaidEnvironment;
pub use models::{
    Account, AccountBalances, FinancialData, LinkTokenCreate, TokenExchange, Transaction,
};
