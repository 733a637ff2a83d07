//! Axum extractors for REST API authentication

use crate::api::error::ApiError;
use crate::state::AppState;

use fin_auth::Session;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts a validated [`Session`] from the `Authorization` header.
///
/// There is no fallback identity: a request without a valid bearer token
/// is rejected before the handler body runs, so no operation ever starts
/// without an explicit session.
pub struct CallerSession(pub Session);

impl FromRequestParts<AppState> for CallerSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get("Authorization")
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Missing authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?
                .to_str()
                .map_err(|_| ApiError::Unauthorized {
                    message: "Invalid authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let session = Session::from_bearer(&state.jwt_validator, header_value)?;
            log::debug!("Authenticated session for user {}", session.user_id);

            Ok(CallerSession(session))
        }
    }
}
