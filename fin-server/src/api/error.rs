//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Upstream provider failures are the exception: they replay
//! the provider's status and raw body instead of the local shape.

use fin_auth::AuthError;
use fin_db::DbError;
use fin_plaid::PlaidError;

use std::panic::Location;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Fixed message for requests that need credentials the process was not
/// started with. Never varies, so it cannot leak which pair is missing.
const NOT_CONFIGURED_MESSAGE: &str = "Plaid credentials are not configured";

/// Fixed body for the admin gate. "No role row" and "role is not admin"
/// intentionally produce identical bytes.
const ACCESS_DENIED_MESSAGE: &str = "Access denied";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "FORBIDDEN")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or invalid session (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Admin gate denial (403); deliberately carries no reason
    #[error("Access denied {location}")]
    Forbidden { location: ErrorLocation },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Required provider credentials absent from process config (500)
    #[error("Plaid credentials are not configured {location}")]
    NotConfigured { location: ErrorLocation },

    /// The one upstream error code decoded specially (400)
    #[error("Item login required: {message} {location}")]
    ItemLoginRequired {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream provider error replayed verbatim
    #[error("Upstream error (status {status}) {location}")]
    Upstream {
        status: u16,
        body: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn forbidden() -> Self {
        ApiError::Forbidden {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured() -> Self {
        ApiError::NotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message: ACCESS_DENIED_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotConfigured { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "CONFIG_ERROR".into(),
                    message: NOT_CONFIGURED_MESSAGE.into(),
                    field: None,
                },
            ),
            ApiError::ItemLoginRequired { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "ITEM_LOGIN_REQUIRED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Upstream { status, body, .. } => {
                // Generic passthrough: upstream status and raw body
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                return (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert Plaid client errors to API errors
impl From<PlaidError> for ApiError {
    #[track_caller]
    fn from(e: PlaidError) -> Self {
        match e {
            // The one well-known code gets a structured response;
            // everything else is generic passthrough
            PlaidError::Api { code, message, .. } if code == "ITEM_LOGIN_REQUIRED" => {
                ApiError::ItemLoginRequired {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            PlaidError::Api { status, body, .. } => ApiError::Upstream {
                status,
                body,
                location: ErrorLocation::from(Location::caller()),
            },
            PlaidError::Http { message, .. } => ApiError::Upstream {
                status: 502,
                body: serde_json::json!({
                    "error": { "code": "UPSTREAM_UNREACHABLE", "message": message }
                })
                .to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            PlaidError::Decode { message, .. } => ApiError::Internal {
                message: format!("Unexpected upstream response: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
