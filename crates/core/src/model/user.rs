//! User domain type.

use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId};

/// A shop user.
///
/// The id is `None` until the backend has accepted the account; the email
/// is the unique key once it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned ID, absent for a not-yet-accepted registration.
    pub id: Option<UserId>,
    /// Display name.
    pub name: String,
    /// Email address (unique key).
    pub email: Email,
    /// Whether this user may manage the catalog.
    pub is_admin: bool,
}

impl User {
    /// A freshly submitted, not-yet-accepted user.
    #[must_use]
    pub fn new(name: impl Into<String>, email: Email) -> Self {
        Self {
            id: None,
            name: name.into(),
            email,
            is_admin: false,
        }
    }
}
