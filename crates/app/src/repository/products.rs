//! Product repository.
//!
//! The fixture backend answers every listing with the same two products and
//! swallows catalog mutations. The remote backend talks to the catalog
//! routes, where mutations require an admin session.

use openbasket_core::model::{Product, ProductDraft};
use openbasket_core::types::{Price, ProductId};

use super::{Backend, RepositoryError};

/// Repository for catalog operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    backend: Backend,
}

impl ProductRepository {
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

    /// List the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails; the
    /// fixture backend cannot fail.
    pub async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        match &self.backend {
            Backend::Fixture => Ok(fixture_products()),
            Backend::Remote(api) => Ok(api.products().await?),
        }
    }

    /// Add a product to the catalog.
    ///
    /// The fixture backend accepts the call and does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails.
    pub async fn add_product(&self, draft: &ProductDraft) -> Result<(), RepositoryError> {
        match &self.backend {
            Backend::Fixture => {
                tracing::debug!(name = %draft.name, "fixture backend dropped add_product");
                Ok(())
            }
            Backend::Remote(api) => {
                api.create_product(draft).await?;
                Ok(())
            }
        }
    }

    /// Delete a product from the catalog.
    ///
    /// The fixture backend accepts the call and does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Api`] when the remote call fails.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError> {
        match &self.backend {
            Backend::Fixture => {
                tracing::debug!(%id, "fixture backend dropped delete_product");
                Ok(())
            }
            Backend::Remote(api) => {
                api.delete_product(id).await?;
                Ok(())
            }
        }
    }
}

/// The two products every fixture listing contains.
#[must_use]
pub fn fixture_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Laptop".to_owned(),
            description: "Powerful laptop".to_owned(),
            price: Price::from(1200),
            category: "Electronics".to_owned(),
            stock: 10,
        },
        Product {
            id: ProductId::new(2),
            name: "Shoes".to_owned(),
            description: "Comfortable shoes".to_owned(),
            price: Price::from(50),
            category: "Fashion".to_owned(),
            stock: 20,
        },
    ]
}
