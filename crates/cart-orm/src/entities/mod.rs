//! sea-orm entity definitions for the three cart tables.
//!
//! The tables match `shoplab-cart-sql` exactly; the startup schema
//! initializer derives its `CREATE TABLE IF NOT EXISTS` statements from
//! these definitions, including the two foreign keys declared on
//! [`shopping_cart`].

pub mod product;
pub mod shopping_cart;
pub mod user;
