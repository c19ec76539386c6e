//! In-memory storage for the backend.
//!
//! There is deliberately no database: every record lives in process memory
//! for the lifetime of the server. The store is seeded at startup with the
//! admin account and the development catalog, so a fresh server satisfies
//! the same contract the client's fixture backend does.
//!
//! # Tables
//!
//! - `users` - accounts, keyed by id, unique by normalized email
//! - `products` - catalog, keyed by id, listed newest first
//! - `carts` - one cart per user id
//!
//! Lock order is users, then products, then carts; methods that touch two
//! tables acquire them in that order.

mod carts;
mod products;
mod users;

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use openbasket_core::model::{Cart, Product, QuantityError, User};
use openbasket_core::types::{Email, Price, ProductId, UserId};

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Quantity outside the accepted range.
    #[error(transparent)]
    InvalidQuantity(#[from] QuantityError),

    /// The requested quantity exceeds the product's stock.
    #[error("insufficient stock: {available} available")]
    InsufficientStock {
        /// Units currently in stock.
        available: u32,
    },
}

/// Display name of the admin account present in every fresh store.
pub const SEED_ADMIN_NAME: &str = "Admin";
/// Email of the seeded admin account.
pub const SEED_ADMIN_EMAIL: &str = "admin@example.com";

pub(crate) struct UserTable {
    next_id: i32,
    users: BTreeMap<UserId, User>,
}

pub(crate) struct StoredProduct {
    product: Product,
    created_at: DateTime<Utc>,
}

pub(crate) struct ProductTable {
    next_id: i32,
    products: BTreeMap<ProductId, StoredProduct>,
}

/// In-memory backing store.
pub struct Store {
    users: RwLock<UserTable>,
    products: RwLock<ProductTable>,
    carts: RwLock<HashMap<UserId, Cart>>,
}

impl Store {
    /// An empty store with no accounts and no catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(UserTable {
                next_id: 1,
                users: BTreeMap::new(),
            }),
            products: RwLock::new(ProductTable {
                next_id: 1,
                products: BTreeMap::new(),
            }),
            carts: RwLock::new(HashMap::new()),
        }
    }

    /// A store seeded with the admin account and the development catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let admin_id = UserId::new(1);
        let admin = User {
            id: Some(admin_id),
            name: SEED_ADMIN_NAME.to_owned(),
            email: Email::parse(SEED_ADMIN_EMAIL).expect("seed email is valid"),
            is_admin: true,
        };
        let mut users = BTreeMap::new();
        users.insert(admin_id, admin);

        let now = Utc::now();
        let mut products = BTreeMap::new();
        for (id, name, description, price, category, stock) in [
            (1, "Laptop", "Powerful laptop", 1200_u32, "Electronics", 10_u32),
            (2, "Shoes", "Comfortable shoes", 50, "Fashion", 20),
        ] {
            let id = ProductId::new(id);
            products.insert(
                id,
                StoredProduct {
                    product: Product {
                        id,
                        name: name.to_owned(),
                        description: description.to_owned(),
                        price: Price::from(price),
                        category: category.to_owned(),
                        stock,
                    },
                    created_at: now,
                },
            );
        }

        Self {
            users: RwLock::new(UserTable { next_id: 2, users }),
            products: RwLock::new(ProductTable {
                next_id: 3,
                products,
            }),
            carts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}
