//! Product entity.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Envelope key for product responses.
pub const ENTITY: &str = "Product";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "ProductId")]
    pub product_id: i32,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "ManufacturingDate")]
    pub manufacturing_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ShoppingCart,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ShoppingCart => Entity::has_many(super::shopping_cart::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_as_decimal_string() {
        let model = Model {
            product_id: 4,
            product_name: "Corer".to_owned(),
            price: Decimal::new(450, 2),
            manufacturing_date: Date::from_ymd_opt(2022, 6, 30).unwrap(),
        };

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["Price"], serde_json::json!("4.50"));
    }
}
