//! User table operations.

use openbasket_core::model::User;
use openbasket_core::types::{Email, UserId};

use super::{Store, StoreError};

impl Store {
    /// Insert a new non-admin account.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the normalized email is
    /// already taken.
    pub async fn create_user(&self, name: &str, email: Email) -> Result<User, StoreError> {
        let mut table = self.users.write().await;

        if table.users.values().any(|user| user.email == email) {
            return Err(StoreError::Conflict("email already exists".to_owned()));
        }

        let id = UserId::new(table.next_id);
        table.next_id += 1;

        let user = User {
            id: Some(id),
            name: name.to_owned(),
            email,
            is_admin: false,
        };
        table.users.insert(id, user.clone());

        tracing::debug!(%id, email = %user.email, "user created");
        Ok(user)
    }

    /// Look up an account by normalized email.
    pub async fn user_by_email(&self, email: &Email) -> Option<User> {
        self.users
            .read()
            .await
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned()
    }

    /// Look up an account by id.
    pub async fn user_by_id(&self, id: UserId) -> Option<User> {
        self.users.read().await.users.get(&id).cloned()
    }
}
