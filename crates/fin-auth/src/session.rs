//! Explicit session values.
//!
//! Every operation that needs the caller identity takes a [`Session`]
//! argument; nothing reads ambient auth state.

use crate::{AuthError, Claims, JwtValidator, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// A validated caller identity, produced from a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
}

impl Session {
    /// Build a session from validated claims
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { user_id })
    }

    /// Validate a raw `Authorization` header value into a session
    #[track_caller]
    pub fn from_bearer(validator: &JwtValidator, header_value: &str) -> AuthErrorResult<Self> {
        let token = parse_bearer(header_value)?;
        let claims = validator.validate(token)?;
        Self::from_claims(&claims)
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
#[track_caller]
pub fn parse_bearer(header_value: &str) -> AuthErrorResult<&str> {
    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?;

    if token.is_empty() {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
