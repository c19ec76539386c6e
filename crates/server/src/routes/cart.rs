//! Cart route handlers.
//!
//! Every route requires a logged-in user; the cart is keyed by the session
//! user's id. Mutations respond with the updated cart so clients can render
//! without a follow-up read.

use axum::{Json, extract::State};
use tracing::instrument;

use openbasket_core::model::{Cart, User};
use openbasket_core::types::UserId;
use openbasket_core::wire::{AddToCartRequest, RemoveFromCartRequest, UpdateCartRequest};

use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::state::AppState;

/// The session user's id.
///
/// A session user always carries an id; the backend assigned one at
/// registration or seeding.
fn current_user_id(user: &User) -> Result<UserId> {
    user.id
        .ok_or_else(|| AppError::Internal("session user has no id".to_owned()))
}

/// The current user's cart.
#[instrument(skip(user, state), fields(user = %user.0.email))]
pub async fn show(user: RequireUser, State(state): State<AppState>) -> Result<Json<Cart>> {
    let user_id = current_user_id(&user.0)?;
    Ok(Json(state.store().cart(user_id).await))
}

/// Add units of a product, merging into an existing line.
#[instrument(skip(user, state), fields(user = %user.0.email))]
pub async fn add(
    user: RequireUser,
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<Cart>> {
    let user_id = current_user_id(&user.0)?;
    let cart = state
        .store()
        .cart_add(user_id, body.product_id, body.quantity)
        .await?;
    Ok(Json(cart))
}

/// Replace the quantity of an existing line.
#[instrument(skip(user, state), fields(user = %user.0.email))]
pub async fn update(
    user: RequireUser,
    State(state): State<AppState>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<Cart>> {
    let user_id = current_user_id(&user.0)?;
    let cart = state
        .store()
        .cart_update(user_id, body.product_id, body.quantity)
        .await?;
    Ok(Json(cart))
}

/// Remove the line for a product.
#[instrument(skip(user, state), fields(user = %user.0.email))]
pub async fn remove(
    user: RequireUser,
    State(state): State<AppState>,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Json<Cart>> {
    let user_id = current_user_id(&user.0)?;
    let cart = state.store().cart_remove(user_id, body.product_id).await?;
    Ok(Json(cart))
}

/// Empty the cart.
#[instrument(skip(user, state), fields(user = %user.0.email))]
pub async fn clear(user: RequireUser, State(state): State<AppState>) -> Result<Json<Cart>> {
    let user_id = current_user_id(&user.0)?;
    Ok(Json(state.store().cart_clear(user_id).await))
}
