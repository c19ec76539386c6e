//! Request and error payloads for the HTTP API.
//!
//! Shared between the server routes and the client's `ApiClient` so the two
//! sides cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,
    /// Email address (unique key).
    pub email: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address of the account.
    pub email: String,
}

/// Body of `POST /cart/add`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddToCartRequest {
    /// Product to add.
    pub product_id: ProductId,
    /// Units to add; merged into an existing line for the product.
    pub quantity: u32,
}

/// Body of `POST /cart/update`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateCartRequest {
    /// Product whose line is updated.
    pub product_id: ProductId,
    /// Replacement quantity, must be >= 1.
    pub quantity: u32,
}

/// Body of `POST /cart/remove`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RemoveFromCartRequest {
    /// Product whose line is removed.
    pub product_id: ProductId,
}

/// Error payload returned by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "Invalid credentials".to_owned(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Invalid credentials"}"#
        );
    }

    #[test]
    fn test_add_to_cart_roundtrip() {
        let req = AddToCartRequest {
            product_id: ProductId::new(1),
            quantity: 2,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"product_id":1,"quantity":2}"#);
    }
}
