//! Product domain types.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the catalog.
///
/// Price and stock are non-negative by construction: [`Price`] rejects
/// negative amounts and stock is unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category label (e.g., "Electronics").
    pub category: String,
    /// Units in stock.
    pub stock: u32,
}

impl Product {
    /// Attach a catalog ID to a draft, producing the stored product.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            stock: draft.stock,
        }
    }
}

/// A product submission, before the catalog has assigned an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category label.
    pub category: String,
    /// Units in stock.
    pub stock: u32,
}
