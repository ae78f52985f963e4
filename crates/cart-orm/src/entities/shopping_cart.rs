//! Shopping-cart entity.
//!
//! Declares the two `belongs_to` relations that become foreign keys when
//! the schema initializer builds this table. The store, not the service,
//! rejects rows referencing a missing user or product.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Envelope key for shopping-cart responses.
pub const ENTITY: &str = "ShoppingCart";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "shopping_carts")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "CartId")]
    pub cart_id: i32,
    #[serde(rename = "UserId")]
    pub user_id: i32,
    #[serde(rename = "ProductId")]
    pub product_id: i32,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(super::user::Entity)
                .from(Column::UserId)
                .to(super::user::Column::UserId)
                .into(),
            Self::Product => Entity::belongs_to(super::product::Entity)
                .from(Column::ProductId)
                .to(super::product::Column::ProductId)
                .into(),
        }
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
