//! Openbasket Core - Shared types library.
//!
//! This crate provides common types used across all Openbasket components:
//! - `app` - Client library (repositories, view-models, API client)
//! - `server` - In-memory REST backend
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails
//! - [`model`] - Domain records shared across the wire
//! - [`wire`] - HTTP request and error payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod model;
pub mod types;
pub mod wire;

pub use model::*;
pub use types::*;
