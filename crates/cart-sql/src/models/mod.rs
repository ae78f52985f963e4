//! Wire and row models for the three cart entities.
//!
//! JSON field names are PascalCase (the lab wire contract); database
//! columns are snake_case. Each entity has a full row type and a
//! `*Fields` input type covering everything but the generated id.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::{CartFields, ShoppingCart};
pub use product::{Product, ProductFields};
pub use user::{User, UserFields};
