//! User repository: registration and login.
//!
//! The fixture backend carries the development placeholder policy: a single
//! reserved email is the only account that exists. Registration of that
//! email reports a duplicate; login succeeds for that email alone and
//! yields the admin account. The remote backend performs the same
//! operations against the real user table.

use reqwest::StatusCode;

use openbasket_core::model::User;
use openbasket_core::types::{Email, EmailError, UserId};

use crate::api::ApiError;

use super::Backend;

/// The one email the fixture backend recognizes as an existing account.
pub const RESERVED_EMAIL: &str = "admin@example.com";

/// Errors that can occur during authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// An account with this email already exists.
    #[error("user already exists")]
    DuplicateUser,

    /// No account matches the submitted email.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The backend call failed for reasons other than the decision itself.
    #[error("backend error: {0}")]
    Backend(ApiError),
}

impl AuthError {
    /// The message shown to the user for this failure.
    ///
    /// The duplicate-user and invalid-credentials strings are fixed wording
    /// the screens display verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateUser => "User already exists".to_owned(),
            Self::InvalidCredentials => "Invalid credentials".to_owned(),
            Self::InvalidEmail(_) => "Invalid email address".to_owned(),
            Self::Backend(_) => "Could not reach the shop".to_owned(),
        }
    }

    /// Map a registration API failure onto the auth outcome it encodes.
    fn from_register(err: ApiError) -> Self {
        match err.status() {
            Some(StatusCode::CONFLICT) => Self::DuplicateUser,
            _ => Self::Backend(err),
        }
    }

    /// Map a login API failure onto the auth outcome it encodes.
    fn from_login(err: ApiError) -> Self {
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) => Self::InvalidCredentials,
            _ => Self::Backend(err),
        }
    }
}

/// Repository for account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    backend: Backend,
}

impl UserRepository {
    /// Repository answering from the fixture policy.
    #[must_use]
    pub const fn fixture() -> Self {
        Self {
            backend: Backend::Fixture,
        }
    }

    /// Repository backed by the REST API.
    #[must_use]
    pub const fn remote(api: crate::ApiClient) -> Self {
        Self {
            backend: Backend::Remote(api),
        }
    }

    /// Register a new account.
    ///
    /// On success the returned user carries the submitted name and email;
    /// the fixture backend leaves the id unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] for malformed input and
    /// [`AuthError::DuplicateUser`] when the email is already taken.
    pub async fn register(&self, name: &str, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        match &self.backend {
            Backend::Fixture => {
                if email.as_str() == RESERVED_EMAIL {
                    tracing::debug!(email = %email, "fixture register rejected: reserved email");
                    return Err(AuthError::DuplicateUser);
                }
                Ok(User::new(name, email))
            }
            Backend::Remote(api) => api
                .register(name, &email)
                .await
                .map_err(AuthError::from_register),
        }
    }

    /// Log in with an email.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] for malformed input and
    /// [`AuthError::InvalidCredentials`] when no account matches.
    pub async fn login(&self, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        match &self.backend {
            Backend::Fixture => {
                if email.as_str() == RESERVED_EMAIL {
                    return Ok(User {
                        id: Some(UserId::new(1)),
                        name: "Admin".to_owned(),
                        email,
                        is_admin: true,
                    });
                }
                tracing::debug!(email = %email, "fixture login rejected: unknown email");
                Err(AuthError::InvalidCredentials)
            }
            Backend::Remote(api) => api.login(&email).await.map_err(AuthError::from_login),
        }
    }
}
