//! Admin user management handlers
//!
//! Every handler runs the admin gate before touching any data: one role
//! lookup for the caller, with "no role row" and "role is not admin"
//! collapsing into the same denial so the response never says which one
//! happened. The listing query is only issued after the gate passes.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::session::CallerSession;
use crate::api::users::delete_response::DeleteResponse;
use crate::api::users::set_approval_request::SetApprovalRequest;
use crate::api::users::user_dto::UserDto;
use crate::api::users::user_list_response::UserListResponse;
use crate::state::AppState;

use fin_auth::Session;
use fin_db::{AuthUserRepository, ProfileRepository, RoleRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Admin gate: single point role lookup for the caller
async fn require_admin(state: &AppState, session: &Session) -> ApiResult<()> {
    let repo = RoleRepository::new(state.pool.clone());

    match repo.find_role(session.user_id).await? {
        Some(role) if role.is_admin() => Ok(()),
        _ => {
            log::warn!("Denied admin access for user {}", session.user_id);
            Err(ApiError::forbidden())
        }
    }
}

/// Load all profiles with the email join, degrading to email-less
/// entries when the auth subsystem lookup fails.
async fn load_user_list(state: &AppState) -> ApiResult<UserListResponse> {
    let profiles = ProfileRepository::new(state.pool.clone()).find_all().await?;

    let mut emails = match AuthUserRepository::new(state.pool.clone()).find_emails().await {
        Ok(emails) => emails,
        Err(e) => {
            log::warn!("Email lookup failed, listing users without emails: {}", e);
            Default::default()
        }
    };

    let users = profiles
        .into_iter()
        .map(|profile| {
            let email = emails.remove(&profile.id);
            UserDto::from_profile(profile, email)
        })
        .collect();

    Ok(UserListResponse { users })
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users
///
/// List all user profiles, newest signup first
pub async fn list_users(
    State(state): State<AppState>,
    CallerSession(session): CallerSession,
) -> ApiResult<Json<UserListResponse>> {
    require_admin(&state, &session).await?;

    Ok(Json(load_user_list(&state).await?))
}

/// PUT /api/v1/users/:id/approval
///
/// Apply an approve/reject decision, then return the refreshed listing
/// so clients re-render from server state instead of patching locally.
pub async fn set_approval(
    State(state): State<AppState>,
    CallerSession(session): CallerSession,
    Path(id): Path<String>,
    Json(request): Json<SetApprovalRequest>,
) -> ApiResult<Json<UserListResponse>> {
    require_admin(&state, &session).await?;

    let user_id = Uuid::parse_str(&id)?;

    let repo = ProfileRepository::new(state.pool.clone());
    let updated = repo.set_approval(user_id, request.status).await?;
    if !updated {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!(
        "User {} set to {} by admin {}",
        user_id,
        request.status,
        session.user_id
    );

    Ok(Json(load_user_list(&state).await?))
}

/// DELETE /api/v1/users/:id
///
/// Privileged deletion of a user and all dependent data
pub async fn delete_user(
    State(state): State<AppState>,
    CallerSession(session): CallerSession,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    require_admin(&state, &session).await?;

    let user_id = Uuid::parse_str(&id)?;

    let repo = ProfileRepository::new(state.pool.clone());
    let deleted = repo.delete(user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("User {} deleted by admin {}", user_id, session.user_id);

    Ok(Json(DeleteResponse { success: true }))
}
