//! Product table operations.

use chrono::Utc;

use openbasket_core::model::{Product, ProductDraft};
use openbasket_core::types::ProductId;

use super::{Store, StoreError, StoredProduct};

impl Store {
    /// The catalog, newest first.
    pub async fn list_products(&self) -> Vec<Product> {
        let table = self.products.read().await;
        let mut entries: Vec<&StoredProduct> = table.products.values().collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.product.id.cmp(&a.product.id))
        });
        entries.iter().map(|entry| entry.product.clone()).collect()
    }

    /// A single product.
    pub async fn product(&self, id: ProductId) -> Option<Product> {
        self.products
            .read()
            .await
            .products
            .get(&id)
            .map(|entry| entry.product.clone())
    }

    /// Add a product to the catalog and assign its id.
    pub async fn create_product(&self, draft: ProductDraft) -> Product {
        let mut table = self.products.write().await;

        let id = ProductId::new(table.next_id);
        table.next_id += 1;

        let product = Product::from_draft(id, draft);
        table.products.insert(
            id,
            StoredProduct {
                product: product.clone(),
                created_at: Utc::now(),
            },
        );

        tracing::debug!(%id, name = %product.name, "product created");
        product
    }

    /// Remove a product from the catalog and from every cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the product does not exist.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        // Lock order: products before carts.
        let mut table = self.products.write().await;
        if table.products.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }

        let mut carts = self.carts.write().await;
        for cart in carts.values_mut() {
            cart.remove(id);
        }

        tracing::debug!(%id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use openbasket_core::types::{Price, UserId};

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            description: format!("{name} description"),
            price: Price::from(10),
            category: "Misc".to_owned(),
            stock: 4,
        }
    }

    #[tokio::test]
    async fn test_seeded_listing_contains_the_two_fixtures() {
        let store = Store::seeded();
        let listing = store.list_products().await;

        assert_eq!(listing.len(), 2);
        let names: Vec<&str> = listing.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"Laptop"));
        assert!(names.contains(&"Shoes"));
    }

    #[tokio::test]
    async fn test_created_products_list_newest_first() {
        let store = Store::seeded();
        let hat = store.create_product(draft("Hat")).await;

        let listing = store.list_products().await;
        assert_eq!(listing.first().map(|p| p.id), Some(hat.id));
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let store = Store::seeded();
        let first = store.create_product(draft("Hat")).await;
        let second = store.create_product(draft("Scarf")).await;

        assert_eq!(first.id, ProductId::new(3));
        assert_eq!(second.id, ProductId::new(4));
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let store = Store::seeded();
        let err = store.delete_product(ProductId::new(99)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_product_from_carts() {
        let store = Store::seeded();
        let user = UserId::new(1);
        store.cart_add(user, ProductId::new(1), 1).await.unwrap();
        store.cart_add(user, ProductId::new(2), 1).await.unwrap();

        store.delete_product(ProductId::new(1)).await.unwrap();

        let cart = store.cart(user).await;
        assert_eq!(cart.items().len(), 1);
        assert!(cart.line(ProductId::new(1)).is_none());
        assert!(store.product(ProductId::new(1)).await.is_none());
    }
}
