//! Openbasket client library.
//!
//! The client half of the shop: view-models hold [`Observable`] state,
//! repositories act as the boundary to the backend, and [`ApiClient`]
//! performs the actual HTTP calls.
//!
//! # Control flow
//!
//! Caller input goes to a view-model method, the view-model forwards to a
//! repository, the repository answers from its backend (offline fixtures or
//! the remote API), and the view-model publishes the outcome to its
//! observables. Callers never receive results directly from view-model
//! methods; they watch the observables.
//!
//! # Backends
//!
//! Every repository is constructed in one of two modes:
//!
//! - [`Backend::Fixture`] - canned development data, no I/O
//! - [`Backend::Remote`] - the real REST backend via [`ApiClient`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod observable;
pub mod repository;
pub mod viewmodel;

pub use api::{ApiClient, ApiError};
pub use config::{AppConfig, ConfigError};
pub use observable::{Observable, Watcher};
pub use repository::{AuthError, Backend, CartRepository, ProductRepository, UserRepository};
pub use viewmodel::{AuthViewModel, CartViewModel, ProductViewModel};
