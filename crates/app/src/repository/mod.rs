//! Repositories: the client's boundary to the backend.
//!
//! Each repository is a concrete struct over a [`Backend`]:
//!
//! - [`Backend::Fixture`] reproduces the development placeholder: canned
//!   products, an empty cart, and the reserved-email auth policy. No I/O.
//! - [`Backend::Remote`] forwards every operation to the REST backend
//!   through [`ApiClient`](crate::ApiClient).

pub mod cart;
pub mod products;
pub mod users;

pub use cart::CartRepository;
pub use products::ProductRepository;
pub use users::{AuthError, UserRepository, RESERVED_EMAIL};

use crate::api::{ApiClient, ApiError};

/// Where a repository's answers come from.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Canned development data, no I/O.
    Fixture,
    /// The REST backend.
    Remote(ApiClient),
}

/// Errors from product and cart repositories.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backend call failed.
    #[error("backend error: {0}")]
    Api(#[from] ApiError),
}

impl RepositoryError {
    /// The message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(ApiError::Http { message, .. }) => message.clone(),
            Self::Api(ApiError::Transport(_)) => "Could not reach the shop".to_owned(),
        }
    }
}
