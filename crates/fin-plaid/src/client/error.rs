use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors from the Plaid API client
#[derive(Error, Debug)]
pub enum PlaidError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream rejected the call. `status` and `body` are preserved
    /// verbatim so proxies can pass them straight through.
    #[error("Plaid API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        body: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response shape: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl PlaidError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        PlaidError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        PlaidError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for PlaidError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        PlaidError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for PlaidError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        PlaidError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, PlaidError>;
