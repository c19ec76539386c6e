//! Authentication view-model.

use openbasket_core::model::User;

use crate::observable::Observable;
use crate::repository::UserRepository;

/// Holds the signed-in user and the last auth failure message.
///
/// After every completed call exactly one of the two observables holds a
/// value: success publishes the user and clears the error, failure publishes
/// the error message and clears the user.
#[derive(Debug, Clone)]
pub struct AuthViewModel {
    users: UserRepository,
    user: Observable<Option<User>>,
    error: Observable<Option<String>>,
}

impl AuthViewModel {
    /// Create a view-model over a user repository.
    #[must_use]
    pub fn new(users: UserRepository) -> Self {
        Self {
            users,
            user: Observable::new(None),
            error: Observable::new(None),
        }
    }

    /// The signed-in (or just-registered) user.
    #[must_use]
    pub const fn user(&self) -> &Observable<Option<User>> {
        &self.user
    }

    /// The last failure message, user-facing wording.
    #[must_use]
    pub const fn error(&self) -> &Observable<Option<String>> {
        &self.error
    }

    /// Register a new account and publish the outcome.
    pub async fn register(&self, name: &str, email: &str) {
        match self.users.register(name, email).await {
            Ok(user) => {
                self.error.set(None);
                self.user.set(Some(user));
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
                self.user.set(None);
                self.error.set(Some(err.user_message()));
            }
        }
    }

    /// Log in and publish the outcome.
    pub async fn login(&self, email: &str) {
        match self.users.login(email).await {
            Ok(user) => {
                self.error.set(None);
                self.user.set(Some(user));
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.user.set(None);
                self.error.set(Some(err.user_message()));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::repository::RESERVED_EMAIL;

    #[tokio::test]
    async fn test_register_publishes_user() {
        let vm = AuthViewModel::new(UserRepository::fixture());
        let mut users = vm.user().watch();

        vm.register("Alice", "alice@x.com").await;

        let user = users.changed().await.unwrap().unwrap();
        assert_eq!(user.name, "Alice");
        assert!(!user.is_admin);
        assert_eq!(vm.error().get(), None);
    }

    #[tokio::test]
    async fn test_register_duplicate_publishes_error() {
        let vm = AuthViewModel::new(UserRepository::fixture());
        let mut errors = vm.error().watch();

        vm.register("Mallory", RESERVED_EMAIL).await;

        assert_eq!(
            errors.changed().await.unwrap().as_deref(),
            Some("User already exists")
        );
        assert_eq!(vm.user().get(), None);
    }

    #[tokio::test]
    async fn test_login_admin_publishes_admin_user() {
        let vm = AuthViewModel::new(UserRepository::fixture());

        vm.login(RESERVED_EMAIL).await;

        let user = vm.user().get().unwrap();
        assert!(user.is_admin);
        assert_eq!(user.email.as_str(), RESERVED_EMAIL);
    }

    #[tokio::test]
    async fn test_login_unknown_publishes_invalid_credentials() {
        let vm = AuthViewModel::new(UserRepository::fixture());

        vm.login("bob@x.com").await;

        assert_eq!(vm.error().get().as_deref(), Some("Invalid credentials"));
        assert_eq!(vm.user().get(), None);
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let vm = AuthViewModel::new(UserRepository::fixture());

        vm.login("bob@x.com").await;
        assert!(vm.error().get().is_some());

        vm.login(RESERVED_EMAIL).await;
        assert_eq!(vm.error().get(), None);
        assert!(vm.user().get().is_some());
    }
}
