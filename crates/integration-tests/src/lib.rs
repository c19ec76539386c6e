//! Integration tests for Openbasket.
//!
//! The harness boots the real server router in-process on an ephemeral
//! loopback port; tests then exercise the HTTP surface either with a raw
//! reqwest client or through the client library's remote repositories.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p openbasket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - registration/login contract over the wire
//! - `products` - catalog listing and admin-only mutations
//! - `cart_flow` - per-session carts, merging, stock limits
//! - `client_flow` - the client library's view-models against the server

#![cfg_attr(not(test), forbid(unsafe_code))]

use openbasket_app::{ApiClient, AppConfig};
use openbasket_server::config::ServerConfig;
use openbasket_server::routes;
use openbasket_server::state::AppState;
use openbasket_server::store::Store;

/// A server instance bound to an ephemeral loopback port.
///
/// Each instance owns a freshly seeded store, so tests are isolated from
/// each other. The serve task is aborted on drop.
pub struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Boot the full application stack on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics when the listener cannot be bound; tests cannot proceed
    /// without it.
    pub async fn spawn() -> Self {
        let state = AppState::new(ServerConfig::default(), Store::seeded());
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("listener has no local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// The server's base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A raw HTTP client with a cookie store (one session per client).
    ///
    /// # Panics
    ///
    /// Panics when the client cannot be constructed.
    #[must_use]
    pub fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build reqwest client")
    }

    /// An [`ApiClient`] from the client library, pointed at this server.
    ///
    /// # Panics
    ///
    /// Panics when the base URL does not parse or the client cannot be
    /// constructed.
    #[must_use]
    pub fn api_client(&self) -> ApiClient {
        let config =
            AppConfig::with_base_url(self.base_url.parse().expect("base url must parse"));
        ApiClient::new(&config).expect("failed to build api client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
