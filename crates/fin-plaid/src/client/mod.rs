pub(crate) mod client;
pub(crate) mod error;

pub use client::PlaidClient;
pub use error::{PlaidError, Result};
