//! Command implementations.

pub mod auth;
pub mod cart;
pub mod products;

use thiserror::Error;
use url::Url;

use openbasket_app::{
    ApiClient, ApiError, AppConfig, CartRepository, ConfigError, ProductRepository, UserRepository,
};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The API client could not be constructed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The operation itself failed; the message is what a screen would show.
    #[error("{0}")]
    Failed(String),
}

/// The backend every repository in this invocation answers from.
///
/// One shared [`ApiClient`] per invocation, so a login and the calls after
/// it ride the same session cookie.
pub enum BackendChoice {
    /// Built-in fixtures, no server involved.
    Offline,
    /// A running server.
    Remote(ApiClient),
}

impl BackendChoice {
    /// Resolve the backend from the global flags.
    ///
    /// # Errors
    ///
    /// Returns `CliError` when configuration or client construction fails.
    pub fn new(offline: bool, api_url: Option<Url>) -> Result<Self, CliError> {
        if offline {
            return Ok(Self::Offline);
        }

        let config = match api_url {
            Some(url) => AppConfig::with_base_url(url),
            None => AppConfig::from_env()?,
        };
        Ok(Self::Remote(ApiClient::new(&config)?))
    }

    /// User repository over this backend.
    #[must_use]
    pub fn users(&self) -> UserRepository {
        match self {
            Self::Offline => UserRepository::fixture(),
            Self::Remote(api) => UserRepository::remote(api.clone()),
        }
    }

    /// Product repository over this backend.
    #[must_use]
    pub fn products(&self) -> ProductRepository {
        match self {
            Self::Offline => ProductRepository::fixture(),
            Self::Remote(api) => ProductRepository::remote(api.clone()),
        }
    }

    /// Cart repository over this backend.
    #[must_use]
    pub fn cart(&self) -> CartRepository {
        match self {
            Self::Offline => CartRepository::fixture(),
            Self::Remote(api) => CartRepository::remote(api.clone()),
        }
    }
}

/// Turn a view-model's error observable into the command outcome.
///
/// # Errors
///
/// Returns `CliError::Failed` carrying the published message, if any.
pub fn ensure_ok(error: Option<String>) -> Result<(), CliError> {
    match error {
        None => Ok(()),
        Some(message) => Err(CliError::Failed(message)),
    }
}
