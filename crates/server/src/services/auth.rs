//! Authentication service.
//!
//! Decides whether a registration or login succeeds against the user table.
//! There is no password or token scheme; possession of a registered email is
//! the whole credential, and the session cookie carries the result.

use openbasket_core::model::User;
use openbasket_core::types::{Email, EmailError};

use crate::store::{Store, StoreError};

/// Errors that can occur during authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// No account matches the submitted email.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Store error.
    #[error("store error: {0}")]
    Store(StoreError),
}

/// Authentication service.
///
/// Borrow-based like the repositories it fronts: construct one per request.
pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::UserAlreadyExists` if the email is already
    /// registered.
    pub async fn register(&self, name: &str, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let user = self
            .store
            .create_user(name, email)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Store(other),
            })?;

        Ok(user)
    }

    /// Login with an email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::InvalidCredentials` if no account matches.
    pub async fn login(&self, email: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        self.store
            .user_by_email(&email)
            .await
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::SEED_ADMIN_EMAIL;

    #[tokio::test]
    async fn test_register_seed_email_already_exists() {
        let store = Store::seeded();
        let auth = AuthService::new(&store);

        let err = auth.register("Mallory", SEED_ADMIN_EMAIL).await.unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = Store::seeded();
        let auth = AuthService::new(&store);

        let registered = auth.register("Alice", "alice@x.com").await.unwrap();
        assert!(!registered.is_admin);
        assert!(registered.id.is_some());

        let logged_in = auth.login("alice@x.com").await.unwrap();
        assert_eq!(logged_in, registered);
    }

    #[tokio::test]
    async fn test_login_seed_admin() {
        let store = Store::seeded();
        let auth = AuthService::new(&store);

        let admin = auth.login(SEED_ADMIN_EMAIL).await.unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.email.as_str(), SEED_ADMIN_EMAIL);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let store = Store::seeded();
        let auth = AuthService::new(&store);

        let err = auth.login("bob@x.com").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_malformed_email() {
        let store = Store::seeded();
        let auth = AuthService::new(&store);

        let err = auth.login("not-an-email").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }
}
