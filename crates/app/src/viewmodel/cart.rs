//! Cart view-model.

use openbasket_core::model::Cart;
use openbasket_core::types::ProductId;

use crate::observable::Observable;
use crate::repository::CartRepository;

/// Holds the cart for the cart screen.
///
/// Every mutation republishes the cart returned by the repository, so
/// watchers always render the backend's view of the cart rather than a
/// locally patched one.
#[derive(Debug, Clone)]
pub struct CartViewModel {
    repo: CartRepository,
    cart: Observable<Cart>,
    error: Observable<Option<String>>,
}

impl CartViewModel {
    /// Create a view-model over a cart repository.
    #[must_use]
    pub fn new(repo: CartRepository) -> Self {
        Self {
            repo,
            cart: Observable::new(Cart::empty()),
            error: Observable::new(None),
        }
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Observable<Cart> {
        &self.cart
    }

    /// The last failure message, user-facing wording.
    #[must_use]
    pub const fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    /// Reload the cart and publish it.
    pub async fn refresh(&self) {
        self.publish(self.repo.items().await).await;
    }

    /// Add units of a product.
    pub async fn add(&self, product_id: ProductId, quantity: u32) {
        self.publish(self.repo.add(product_id, quantity).await).await;
    }

    /// Replace the quantity of a line.
    pub async fn update_quantity(&self, product_id: ProductId, quantity: u32) {
        self.publish(self.repo.update_quantity(product_id, quantity).await)
            .await;
    }

    /// Remove the line for a product.
    pub async fn remove(&self, product_id: ProductId) {
        self.publish(self.repo.remove(product_id).await).await;
    }

    /// Empty the cart.
    pub async fn clear(&self) {
        self.publish(self.repo.clear().await).await;
    }

    async fn publish(&self, result: Result<Cart, crate::repository::RepositoryError>) {
        match result {
            Ok(cart) => {
                self.error.set(None);
                self.cart.set(cart);
            }
            Err(err) => {
                tracing::warn!(error = %err, "cart operation failed");
                self.error.set(Some(err.user_message()));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refresh_publishes_empty_fixture_cart() {
        let vm = CartViewModel::new(CartRepository::fixture());
        let mut carts = vm.cart().watch();

        vm.refresh().await;

        assert!(carts.changed().await.unwrap().is_empty());
        assert_eq!(vm.error().get(), None);
    }

    #[tokio::test]
    async fn test_fixture_mutations_keep_cart_empty() {
        let vm = CartViewModel::new(CartRepository::fixture());

        vm.add(ProductId::new(1), 2).await;
        vm.update_quantity(ProductId::new(1), 5).await;
        vm.remove(ProductId::new(1)).await;
        vm.clear().await;

        assert!(vm.cart().get().is_empty());
        assert_eq!(vm.error().get(), None);
    }
}
