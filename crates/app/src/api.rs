//! HTTP client for the Openbasket REST backend.
//!
//! A thin reqwest wrapper speaking the JSON routes of `openbasket-server`.
//! The session cookie issued at login is held in the client's cookie store,
//! so one `ApiClient` is one authenticated session.

use reqwest::{Response, StatusCode};
use tracing::instrument;

use openbasket_core::model::{Cart, Product, ProductDraft, User};
use openbasket_core::types::{Email, ProductId};
use openbasket_core::wire::{
    AddToCartRequest, ErrorBody, LoginRequest, RegisterRequest, RemoveFromCartRequest,
    UpdateCartRequest,
};

use crate::config::AppConfig;

/// Errors from the backend API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message} (status {status})")]
    Http {
        /// Response status code.
        status: StatusCode,
        /// Message from the response's error payload.
        message: String,
    },

    /// The request never produced a response (connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The status code, when the backend produced a response.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

/// Client for the Openbasket REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base: config.api_base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Register a new account.
    #[instrument(skip(self))]
    pub async fn register(&self, name: &str, email: &Email) -> Result<User, ApiError> {
        let body = RegisterRequest {
            name: name.to_owned(),
            email: email.as_str().to_owned(),
        };
        let response = self
            .http
            .post(self.endpoint("/auth/register"))
            .json(&body)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Log in, establishing the session.
    #[instrument(skip(self))]
    pub async fn login(&self, email: &Email) -> Result<User, ApiError> {
        let body = LoginRequest {
            email: email.as_str().to_owned(),
        };
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&body)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Log out, clearing the session.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.endpoint("/auth/logout")).send().await?;
        checked(response).await?;
        Ok(())
    }

    /// The session's current user.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User, ApiError> {
        let response = self.http.get(self.endpoint("/auth/me")).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List the catalog, newest first.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.http.get(self.endpoint("/products")).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Fetch a single product.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/products/{id}")))
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Add a product to the catalog (admin only).
    #[instrument(skip(self, draft))]
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/products"))
            .json(draft)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Delete a product from the catalog (admin only).
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/products/{id}")))
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The session user's cart.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Cart, ApiError> {
        let response = self.http.get(self.endpoint("/cart")).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Add units of a product, merging into an existing line.
    #[instrument(skip(self))]
    pub async fn cart_add(&self, product_id: ProductId, quantity: u32) -> Result<Cart, ApiError> {
        let body = AddToCartRequest {
            product_id,
            quantity,
        };
        let response = self
            .http
            .post(self.endpoint("/cart/add"))
            .json(&body)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Replace the quantity of an existing line.
    #[instrument(skip(self))]
    pub async fn cart_update(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        let body = UpdateCartRequest {
            product_id,
            quantity,
        };
        let response = self
            .http
            .post(self.endpoint("/cart/update"))
            .json(&body)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Remove the line for a product.
    #[instrument(skip(self))]
    pub async fn cart_remove(&self, product_id: ProductId) -> Result<Cart, ApiError> {
        let body = RemoveFromCartRequest { product_id };
        let response = self
            .http
            .post(self.endpoint("/cart/remove"))
            .json(&body)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub async fn cart_clear(&self) -> Result<Cart, ApiError> {
        let response = self.http.post(self.endpoint("/cart/clear")).send().await?;
        Ok(checked(response).await?.json().await?)
    }
}

/// Turn a non-success response into `ApiError::Http`, preserving the
/// server's error message when the payload carries one.
async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| status.to_string(), |body| body.error);

    Err(ApiError::Http { status, message })
}
