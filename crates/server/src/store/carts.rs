//! Cart table operations.
//!
//! One cart per user, created on first use. Quantities are checked against
//! the product's stock at mutation time, so a cart can never ask for more
//! units than the catalog holds.

use openbasket_core::model::Cart;
use openbasket_core::types::{ProductId, UserId};

use super::{Store, StoreError};

impl Store {
    /// The user's cart, empty if they have none yet.
    pub async fn cart(&self, user: UserId) -> Cart {
        self.carts
            .read()
            .await
            .get(&user)
            .cloned()
            .unwrap_or_else(Cart::empty)
    }

    /// Add units of a product, merging into an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown product,
    /// [`StoreError::InvalidQuantity`] for a zero quantity, and
    /// [`StoreError::InsufficientStock`] when the resulting line would
    /// exceed the product's stock.
    pub async fn cart_add(
        &self,
        user: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, StoreError> {
        // Lock order: products before carts.
        let product = {
            let table = self.products.read().await;
            table
                .products
                .get(&product_id)
                .map(|entry| entry.product.clone())
                .ok_or(StoreError::NotFound)?
        };

        let mut carts = self.carts.write().await;
        let cart = carts.entry(user).or_insert_with(Cart::empty);

        let in_cart = cart.line(product_id).map_or(0, |line| line.quantity());
        let requested = in_cart.saturating_add(quantity);
        if requested > product.stock {
            return Err(StoreError::InsufficientStock {
                available: product.stock,
            });
        }

        cart.add(product, quantity)?;
        Ok(cart.clone())
    }

    /// Replace the quantity of an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the cart has no line for the
    /// product, [`StoreError::InvalidQuantity`] for a zero quantity, and
    /// [`StoreError::InsufficientStock`] when the quantity exceeds stock.
    pub async fn cart_update(
        &self,
        user: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, StoreError> {
        let stock = {
            let table = self.products.read().await;
            table
                .products
                .get(&product_id)
                .map(|entry| entry.product.stock)
        };

        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(&user).ok_or(StoreError::NotFound)?;

        if let Some(stock) = stock
            && quantity > stock
        {
            return Err(StoreError::InsufficientStock { available: stock });
        }

        if !cart.set_quantity(product_id, quantity)? {
            return Err(StoreError::NotFound);
        }
        Ok(cart.clone())
    }

    /// Remove the line for a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the cart has no line for the
    /// product.
    pub async fn cart_remove(
        &self,
        user: UserId,
        product_id: ProductId,
    ) -> Result<Cart, StoreError> {
        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(&user).ok_or(StoreError::NotFound)?;

        if !cart.remove(product_id) {
            return Err(StoreError::NotFound);
        }
        Ok(cart.clone())
    }

    /// Empty the user's cart unconditionally.
    pub async fn cart_clear(&self, user: UserId) -> Cart {
        let mut carts = self.carts.write().await;
        match carts.get_mut(&user) {
            Some(cart) => {
                cart.clear();
                cart.clone()
            }
            None => Cart::empty(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use openbasket_core::types::Price;

    const USER: UserId = UserId::new(1);
    const LAPTOP: ProductId = ProductId::new(1);
    const SHOES: ProductId = ProductId::new(2);

    #[tokio::test]
    async fn test_cart_starts_empty() {
        let store = Store::seeded();
        assert!(store.cart(USER).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_merges_quantities() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 2).await.unwrap();
        let cart = store.cart_add(USER, LAPTOP, 3).await.unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.line(LAPTOP).unwrap().quantity(), 5);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let store = Store::seeded();
        let err = store
            .cart_add(USER, ProductId::new(99), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_add_zero_quantity() {
        let store = Store::seeded();
        let err = store.cart_add(USER, LAPTOP, 0).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuantity(_)));
    }

    #[tokio::test]
    async fn test_add_beyond_stock() {
        let store = Store::seeded();
        // Laptop stock is 10.
        store.cart_add(USER, LAPTOP, 8).await.unwrap();
        let err = store.cart_add(USER, LAPTOP, 3).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::InsufficientStock { available: 10 }
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_quantity() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 2).await.unwrap();
        let cart = store.cart_update(USER, LAPTOP, 7).await.unwrap();
        assert_eq!(cart.line(LAPTOP).unwrap().quantity(), 7);
    }

    #[tokio::test]
    async fn test_update_beyond_stock() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 2).await.unwrap();
        let err = store.cart_update(USER, LAPTOP, 11).await.unwrap_err();
        assert!(matches!(err, StoreError::InsufficientStock { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_line() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 1).await.unwrap();
        let err = store.cart_update(USER, SHOES, 1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 1).await.unwrap();
        store.cart_add(USER, SHOES, 2).await.unwrap();

        let cart = store.cart_remove(USER, LAPTOP).await.unwrap();
        assert_eq!(cart.items().len(), 1);

        let cart = store.cart_clear(USER).await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_totals_follow_prices() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 1).await.unwrap();
        let cart = store.cart_add(USER, SHOES, 2).await.unwrap();

        assert_eq!(cart.total(), Price::from(1300));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[tokio::test]
    async fn test_carts_are_per_user() {
        let store = Store::seeded();
        store.cart_add(USER, LAPTOP, 1).await.unwrap();

        assert!(store.cart(UserId::new(2)).await.is_empty());
    }
}
