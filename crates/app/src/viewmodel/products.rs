//! Product listing view-model.

use openbasket_core::model::{Product, ProductDraft};
use openbasket_core::types::ProductId;

use crate::observable::Observable;
use crate::repository::ProductRepository;

/// Holds the product listing for the catalog screens.
#[derive(Debug, Clone)]
pub struct ProductViewModel {
    products: ProductRepository,
    listing: Observable<Vec<Product>>,
    error: Observable<Option<String>>,
}

impl ProductViewModel {
    /// Create a view-model over a product repository.
    #[must_use]
    pub fn new(products: ProductRepository) -> Self {
        Self {
            products,
            listing: Observable::new(Vec::new()),
            error: Observable::new(None),
        }
    }

    /// The current product listing.
    #[must_use]
    pub const fn products(&self) -> &Observable<Vec<Product>> {
        &self.listing
    }

    /// The last failure message, user-facing wording.
    #[must_use]
    pub const fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    /// Reload the listing from the repository and publish it.
    pub async fn refresh(&self) {
        match self.products.products().await {
            Ok(products) => {
                self.error.set(None);
                self.listing.set(products);
            }
            Err(err) => {
                tracing::warn!(error = %err, "product listing failed");
                self.error.set(Some(err.user_message()));
            }
        }
    }

    /// Add a product, then republish the listing.
    pub async fn add_product(&self, draft: &ProductDraft) {
        match self.products.add_product(draft).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                tracing::warn!(error = %err, "add product failed");
                self.error.set(Some(err.user_message()));
            }
        }
    }

    /// Delete a product, then republish the listing.
    pub async fn delete_product(&self, id: ProductId) {
        match self.products.delete_product(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                tracing::warn!(error = %err, "delete product failed");
                self.error.set(Some(err.user_message()));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use openbasket_core::types::Price;

    #[tokio::test]
    async fn test_refresh_publishes_fixture_listing() {
        let vm = ProductViewModel::new(ProductRepository::fixture());
        let mut listing = vm.products().watch();

        vm.refresh().await;

        let products = listing.changed().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[1].price, Price::from(50));
    }

    #[tokio::test]
    async fn test_add_product_republishes_listing() {
        let vm = ProductViewModel::new(ProductRepository::fixture());
        let draft = ProductDraft {
            name: "Hat".to_owned(),
            description: "Warm hat".to_owned(),
            price: Price::from(15),
            category: "Fashion".to_owned(),
            stock: 5,
        };

        vm.add_product(&draft).await;

        // Fixture mutations are dropped; the listing stays fixed.
        assert_eq!(vm.products().get().len(), 2);
        assert_eq!(vm.error().get(), None);
    }

    #[tokio::test]
    async fn test_delete_product_republishes_listing() {
        let vm = ProductViewModel::new(ProductRepository::fixture());

        vm.delete_product(ProductId::new(1)).await;

        assert_eq!(vm.products().get().len(), 2);
    }
}
