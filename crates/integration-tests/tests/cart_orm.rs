//! End-to-end tests for the ORM cart service.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The cart-orm server running (cargo run -p shoplab-cart-orm)
//!
//! Run with: cargo test -p shoplab-integration-tests --test cart_orm -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the cart-orm API (configurable via environment).
fn base_url() -> String {
    std::env::var("CART_ORM_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Test helper: create a product with a unique name, returning its envelope.
async fn create_test_product(client: &Client) -> Value {
    let resp = client
        .post(format!("{}/products", base_url()))
        .json(&json!({
            "ProductName": format!("Test Product {}", Uuid::new_v4()),
            "Price": "4.50",
            "ManufacturingDate": "2022-06-30"
        }))
        .send()
        .await
        .expect("Failed to create test product");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to read response")
}

// ============================================================================
// Envelope & CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running cart-orm server and database"]
async fn test_create_then_list_contains_created_product() {
    let client = Client::new();

    let created = create_test_product(&client).await;
    assert_eq!(created["action"], "POST");
    assert_eq!(created["status"], "200 OK");
    let id = created["Product"]["ProductId"].as_i64().expect("generated id");

    let listing: Value = client
        .get(format!("{}/products", base_url()))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to read response");

    let listed = listing["Product"]
        .as_array()
        .expect("Product array")
        .iter()
        .find(|p| p["ProductId"].as_i64() == Some(id))
        .cloned()
        .expect("created product in listing");
    assert_eq!(listed["ProductName"], created["Product"]["ProductName"]);
    assert_eq!(listed["Price"], "4.50");
}

#[tokio::test]
#[ignore = "Requires running cart-orm server and database"]
async fn test_update_is_full_overwrite() {
    let client = Client::new();

    let created = create_test_product(&client).await;
    let id = created["Product"]["ProductId"].as_i64().expect("generated id");

    let resp = client
        .put(format!("{}/products/{id}", base_url()))
        .json(&json!({
            "ProductName": "Renamed Product",
            "Price": "6.00",
            "ManufacturingDate": "2023-01-01"
        }))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["Product"]["ProductName"], "Renamed Product");
    assert_eq!(body["Product"]["Price"], "6.00");
    assert_eq!(body["Product"]["ManufacturingDate"], "2023-01-01");
}

// ============================================================================
// Explicit Not-Found Policy Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running cart-orm server and database"]
async fn test_update_missing_id_is_404() {
    let client = Client::new();

    let resp = client
        .put(format!("{}/products/999999999", base_url()))
        .json(&json!({
            "ProductName": "Ghost",
            "Price": "1.00",
            "ManufacturingDate": "2024-01-01"
        }))
        .send()
        .await
        .expect("Failed to send update");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["status"], "404 Not Found");
    assert_eq!(body["Product"], json!([]));
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
#[ignore = "Requires running cart-orm server and database"]
async fn test_delete_missing_id_is_404() {
    let client = Client::new();

    let resp = client
        .delete(format!("{}/users/999999999", base_url()))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
#[ignore = "Requires running cart-orm server and database"]
async fn test_delete_then_direct_fetch_is_404() {
    let client = Client::new();

    let created = create_test_product(&client).await;
    let id = created["Product"]["ProductId"].as_i64().expect("generated id");

    let resp = client
        .delete(format!("{}/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    // A second delete of the same id now hits the not-found policy
    let resp = client
        .delete(format!("{}/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to send delete");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Referential Integrity Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running cart-orm server and database"]
async fn test_cart_with_dangling_references_is_store_error() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/shoppingcarts", base_url()))
        .json(&json!({
            "UserId": 999999999,
            "ProductId": 999999999,
            "Quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send cart create");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["ShoppingCart"], json!([]));
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}
