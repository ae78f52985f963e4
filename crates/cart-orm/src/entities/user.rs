//! User entity.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Envelope key for user responses.
pub const ENTITY: &str = "User";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(rename = "UserId")]
    pub user_id: i32,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "RegistrationDate")]
    pub registration_date: Date,
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
    fn test_model_serializes_pascal_case() {
        let model = Model {
            user_id: 1,
            full_name: "Grace Hopper".to_owned(),
            address: "1 Compiler Way".to_owned(),
            registration_date: Date::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "UserId": 1,
                "FullName": "Grace Hopper",
                "Address": "1 Compiler Way",
                "RegistrationDate": "2024-01-15"
            })
        );
    }
}
