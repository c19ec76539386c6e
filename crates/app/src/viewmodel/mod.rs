//! View-models: observable state in front of the repositories.
//!
//! A view-model method never returns its result; it forwards the call to a
//! repository and publishes the outcome to the view-model's observables.
//! Screens register watchers on the observables and react to whatever is
//! published.

pub mod auth;
pub mod cart;
pub mod products;

pub use auth::AuthViewModel;
pub use cart::CartViewModel;
pub use products::ProductViewModel;
