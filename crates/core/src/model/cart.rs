//! Cart domain types.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

use super::Product;

/// Error constructing a [`CartItem`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Cart lines always hold at least one unit.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A single product line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product in this line.
    pub product: Product,
    /// Units of the product, always >= 1.
    quantity: u32,
}

impl CartItem {
    /// Create a cart line.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] when `quantity` is zero.
    pub fn new(product: Product, quantity: u32) -> Result<Self, QuantityError> {
        if quantity == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self { product, quantity })
    }

    /// Units of the product in this line.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replace the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] when `quantity` is zero; removal of a
    /// line is an explicit cart operation, not a zero update.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), QuantityError> {
        if quantity == 0 {
            return Err(QuantityError::Zero);
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Add units to the line, saturating at `u32::MAX`.
    pub fn increase(&mut self, by: u32) {
        self.quantity = self.quantity.saturating_add(by);
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// A shopping cart: an ordered list of lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Add units of a product, merging into an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] when `quantity` is zero.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), QuantityError> {
        if quantity == 0 {
            return Err(QuantityError::Zero);
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            item.increase(quantity);
            return Ok(());
        }
        self.items.push(CartItem::new(product, quantity)?);
        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// Returns `false` when the cart has no line for the product.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] when `quantity` is zero.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, QuantityError> {
        match self
            .items
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            Some(item) => {
                item.set_quantity(quantity)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the line for a product. Returns `false` when absent.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        self.items.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, price: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            price: Price::from(price),
            category: "Misc".to_owned(),
            stock: 100,
        }
    }

    #[test]
    fn test_cart_item_rejects_zero_quantity() {
        assert_eq!(
            CartItem::new(product(1, 10), 0),
            Err(QuantityError::Zero)
        );
    }

    #[test]
    fn test_subtotal() {
        let item = CartItem::new(product(1, 50), 3).unwrap();
        assert_eq!(item.subtotal(), Price::from(150));
    }

    #[test]
    fn test_add_merges_lines_per_product() {
        let mut cart = Cart::empty();
        cart.add(product(1, 10), 2).unwrap();
        cart.add(product(2, 20), 1).unwrap();
        cart.add(product(1, 10), 3).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity(), 5);
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn test_total_sums_line_subtotals() {
        let mut cart = Cart::empty();
        cart.add(product(1, 1200), 1).unwrap();
        cart.add(product(2, 50), 2).unwrap();
        assert_eq!(cart.total(), Price::from(1300));
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::empty();
        cart.add(product(1, 10), 2).unwrap();
        assert!(cart.set_quantity(ProductId::new(1), 7).unwrap());
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity(), 7);
    }

    #[test]
    fn test_set_quantity_missing_line() {
        let mut cart = Cart::empty();
        assert!(!cart.set_quantity(ProductId::new(9), 1).unwrap());
    }

    #[test]
    fn test_set_quantity_zero_is_rejected() {
        let mut cart = Cart::empty();
        cart.add(product(1, 10), 2).unwrap();
        assert_eq!(
            cart.set_quantity(ProductId::new(1), 0),
            Err(QuantityError::Zero)
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::empty();
        cart.add(product(1, 10), 1).unwrap();
        cart.add(product(2, 10), 1).unwrap();

        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::empty();
        cart.add(product(1, 10), 2).unwrap();
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
