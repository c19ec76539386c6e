//! Cart repository.
//!
//! The fixture backend is the development placeholder: the cart reads back
//! empty and every mutation is accepted and dropped. The remote backend
//! drives the per-session cart routes and returns the updated cart after
//! each call.

use openbasket_core::model::Cart;
use openbasket_core::types::ProductId;

use super::{Backend, RepositoryError};

/// Repository for cart operations.
#[derive(Debug, Clone)]
pub struct CartRepository {
    backend: Backend,
}

impl CartRepository {
    /// Repository answering with fixture data.
    #[must_use]
    pub const fn fixture() -> Self {
        Self {
            backend: Backend::Fixture,
        }
    }

    /// Repository backed by the REST API.
    #[must_use]
    pub const fn remote(api: crate::ApiClient) -> Self {
        Self {
            backend: Backend::Remote(api),
        }
    }

    /// The current cart.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails; the
    /// fixture backend cannot fail.
    pub async fn items(&self) -> Result<Cart, RepositoryError> {
        match &self.backend {
            Backend::Fixture => Ok(Cart::empty()),
            Backend::Remote(api) => Ok(api.cart().await?),
        }
    }

    /// Add units of a product and return the resulting cart.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails.
    pub async fn add(&self, product_id: ProductId, quantity: u32) -> Result<Cart, RepositoryError> {
        match &self.backend {
            Backend::Fixture => {
                tracing::debug!(%product_id, quantity, "fixture backend dropped cart add");
                Ok(Cart::empty())
            }
            Backend::Remote(api) => Ok(api.cart_add(product_id, quantity).await?),
        }
    }

    /// Replace the quantity of a line and return the resulting cart.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails.
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, RepositoryError> {
        match &self.backend {
            Backend::Fixture => {
                tracing::debug!(%product_id, quantity, "fixture backend dropped cart update");
                Ok(Cart::empty())
            }
            Backend::Remote(api) => Ok(api.cart_update(product_id, quantity).await?),
        }
    }

    /// Remove the line for a product and return the resulting cart.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails.
    pub async fn remove(&self, product_id: ProductId) -> Result<Cart, RepositoryError> {
        match &self.backend {
            Backend::Fixture => {
                tracing::debug!(%product_id, "fixture backend dropped cart remove");
                Ok(Cart::empty())
            }
            Backend::Remote(api) => Ok(api.cart_remove(product_id).await?),
        }
    }

    /// Empty the cart and return it.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails.
    pub async fn clear(&self) -> Result<Cart, RepositoryError> {
        match &self.backend {
            Backend::Fixture => Ok(Cart::empty()),
            Backend::Remote(api) => Ok(api.cart_clear().await?),
        }
    }
}
