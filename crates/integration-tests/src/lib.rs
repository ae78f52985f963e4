//! End-to-end tests for the Shoplab exercise services.
//!
//! # Running Tests
//!
//! Every test drives a live service over HTTP and is `#[ignore]`d by
//! default. Start the service under test (and its backing store), then:
//!
//! ```bash
//! cargo test -p shoplab-integration-tests -- --ignored
//! ```
//!
//! # Test Files
//!
//! - `cart_sql` - raw-driver CRUD, `silent-no-op` missing-row policy
//! - `cart_orm` - ORM CRUD, `explicit-not-found` missing-row policy
//! - `mailer` - validation, relay, and the per-IP rate limit
//! - `imagestore` - upload filters, listing, static serving, delete
//! - `mirror` - idempotent fetch-and-upsert against the document store
//!
//! Base URLs are read from `CART_SQL_BASE_URL`, `CART_ORM_BASE_URL`,
//! `MAILER_BASE_URL`, `IMAGESTORE_BASE_URL`, and `MIRROR_BASE_URL`, with
//! localhost defaults matching each service's default port.
