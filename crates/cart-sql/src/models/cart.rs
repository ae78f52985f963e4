//! ShoppingCart entity models.
//!
//! A cart row references a user and a product; the store enforces both
//! foreign keys. The application never pre-checks them, so a dangling
//! reference surfaces as a constraint violation from the store.

use serde::{Deserialize, Serialize};

use shoplab_core::{CartId, ProductId, UserId};

/// Envelope key for shopping-cart responses.
pub const ENTITY: &str = "ShoppingCart";

/// A shopping-cart row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShoppingCart {
    #[serde(rename = "CartId")]
    pub cart_id: CartId,
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "ProductId")]
    pub product_id: ProductId,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

/// The client-supplied fields of a cart row (everything but the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartFields {
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "ProductId")]
    pub product_id: ProductId,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

impl CartFields {
    /// Attach an id, producing a full row for echo responses.
    #[must_use]
    pub const fn into_cart(self, cart_id: CartId) -> ShoppingCart {
        ShoppingCart {
            cart_id,
            user_id: self.user_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_serializes_pascal_case() {
        let cart = ShoppingCart {
            cart_id: CartId::new(5),
            user_id: UserId::new(1),
            product_id: ProductId::new(2),
            quantity: 3,
        };

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "CartId": 5,
                "UserId": 1,
                "ProductId": 2,
                "Quantity": 3
            })
        );
    }
}
