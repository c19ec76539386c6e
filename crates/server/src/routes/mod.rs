//! HTTP route handlers for the backend.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check
//!
//! # Auth
//! POST   /auth/register        - Create an account
//! POST   /auth/login           - Log in (establishes the session)
//! POST   /auth/logout          - Log out
//! GET    /auth/me              - The session's current user
//!
//! # Products
//! GET    /products             - Product listing, newest first
//! GET    /products/{id}        - Product detail
//! POST   /products             - Add a product (admin)
//! DELETE /products/{id}        - Delete a product (admin)
//!
//! # Cart (requires login)
//! GET    /cart                 - The current user's cart
//! POST   /cart/add             - Add units of a product (merges lines)
//! POST   /cart/update          - Replace a line's quantity
//! POST   /cart/remove          - Remove a line
//! POST   /cart/clear           - Empty the cart
//! ```

pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", get(products::show).delete(products::destroy))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the backend.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
}

/// Assemble the full application: routes, session layer, request tracing.
///
/// Shared by the binary and the integration tests so both run the same
/// stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Probes the store before returning OK.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    let _ = state.store().list_products().await;
    StatusCode::OK
}
