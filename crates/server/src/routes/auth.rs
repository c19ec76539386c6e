//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use openbasket_core::model::User;
use openbasket_core::wire::{LoginRequest, RegisterRequest};

use crate::error::{AppError, Result};
use crate::middleware::{RequireUser, clear_current_user, set_current_user};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Handle registration.
///
/// Creates the account; does not log the new user in.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let user = AuthService::new(state.store())
        .register(&body.name, &body.email)
        .await?;

    tracing::info!(user_id = ?user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handle login.
///
/// On success the user is recorded in the session; the session cookie is
/// the auth carrier for every subsequent request.
#[instrument(skip(state, session, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>> {
    let user = AuthService::new(state.store()).login(&body.email).await?;

    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(format!("failed to set session: {e}")))?;

    tracing::info!(user_id = ?user.id, "user logged in");
    Ok(Json(user))
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(StatusCode::NO_CONTENT)
}

/// The session's current user.
pub async fn me(RequireUser(user): RequireUser) -> Json<User> {
    Json(user)
}
