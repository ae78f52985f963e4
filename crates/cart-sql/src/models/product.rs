//! Product entity models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplab_core::ProductId;

/// Envelope key for product responses.
pub const ENTITY: &str = "Product";

/// A product row. `Price` is NUMERIC(10, 2) in the store and a decimal
/// string on the wire.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    #[serde(rename = "ProductId")]
    pub product_id: ProductId,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "ManufacturingDate")]
    pub manufacturing_date: NaiveDate,
}

/// The client-supplied fields of a product (everything but the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "ManufacturingDate")]
    pub manufacturing_date: NaiveDate,
}

impl ProductFields {
    /// Attach an id, producing a full row for echo responses.
    #[must_use]
    pub fn into_product(self, product_id: ProductId) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            price: self.price,
            manufacturing_date: self.manufacturing_date,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_as_decimal_string() {
        let product = Product {
            product_id: ProductId::new(2),
            product_name: "Citrus Press".to_owned(),
            price: Decimal::new(1999, 2),
            manufacturing_date: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["Price"], serde_json::json!("19.99"));
        assert_eq!(json["ProductName"], serde_json::json!("Citrus Press"));
    }

    #[test]
    fn test_fields_deserialize() {
        let fields: ProductFields = serde_json::from_str(
            r#"{"ProductName": "Slicer", "Price": "19.99", "ManufacturingDate": "2023-11-20"}"#,
        )
        .unwrap();
        assert_eq!(fields.price, Decimal::new(1999, 2));
    }
}
