//! Domain records shared across the wire.
//!
//! These are the validated domain objects exchanged between the client
//! library and the server; both sides serialize them with serde.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem, QuantityError};
pub use product::{Product, ProductDraft};
pub use user::User;
