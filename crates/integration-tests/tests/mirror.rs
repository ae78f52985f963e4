//! End-to-end tests for the mirror.
//!
//! These tests require:
//! - A running MongoDB instance
//! - The mirror running (cargo run -p shoplab-mirror)
//! - Reachability of the configured external feed
//!
//! Run with: cargo test -p shoplab-integration-tests --test mirror -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Base URL for the mirror API (configurable via environment).
fn base_url() -> String {
    std::env::var("MIRROR_BASE_URL").unwrap_or_else(|_| "http://localhost:5002".to_string())
}

/// Test helper: run one fetch-and-save and return the saved documents.
async fn run_fetch(client: &Client) -> Vec<Value> {
    let resp = client
        .post(format!("{}/api/users/fetch", base_url()))
        .send()
        .await
        .expect("Failed to trigger fetch");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["success"], true);
    body["data"].as_array().expect("data array").clone()
}

// ============================================================================
// Idempotency Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running mirror server, MongoDB, and the external feed"]
async fn test_repeated_fetch_does_not_duplicate() {
    let client = Client::new();

    let first = run_fetch(&client).await;
    let second = run_fetch(&client).await;
    assert_eq!(first.len(), second.len());

    // The listing holds exactly one document per external id
    let listing: Value = client
        .get(format!("{}/api/users", base_url()))
        .send()
        .await
        .expect("Failed to list users")
        .json()
        .await
        .expect("Failed to read response");
    let users = listing["data"].as_array().expect("data array");
    assert_eq!(users.len(), first.len());

    let mut ids: Vec<i64> = users
        .iter()
        .map(|u| u["externalId"].as_i64().expect("externalId"))
        .collect();
    ids.dedup();
    assert_eq!(ids.len(), users.len());

    // Sorted by external id
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
#[ignore = "Requires running mirror server, MongoDB, and the external feed"]
async fn test_upsert_keeps_creation_time_stable() {
    let client = Client::new();

    let first = run_fetch(&client).await;
    let created_before: Vec<&Value> = first.iter().map(|u| &u["createdAt"]).collect();

    let second = run_fetch(&client).await;
    let created_after: Vec<&Value> = second.iter().map(|u| &u["createdAt"]).collect();

    // createdAt survives re-fetches untouched; updatedAt moves forward
    assert_eq!(created_before, created_after);
}

// ============================================================================
// Read & Purge Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running mirror server, MongoDB, and the external feed"]
async fn test_single_lookup_by_external_id() {
    let client = Client::new();

    let saved = run_fetch(&client).await;
    let id = saved
        .first()
        .and_then(|u| u["externalId"].as_i64())
        .expect("at least one mirrored user");

    let resp = client
        .get(format!("{}/api/users/{id}", base_url()))
        .send()
        .await
        .expect("Failed to fetch user");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["data"]["externalId"].as_i64(), Some(id));
    assert!(body["data"]["address"]["geo"]["lat"].is_string());
}

#[tokio::test]
#[ignore = "Requires running mirror server and MongoDB"]
async fn test_unknown_external_id_is_404() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/users/999999999", base_url()))
        .send()
        .await
        .expect("Failed to fetch user");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
#[ignore = "Requires running mirror server, MongoDB, and the external feed"]
async fn test_purge_empties_the_collection() {
    let client = Client::new();

    run_fetch(&client).await;

    let resp = client
        .delete(format!("{}/api/users", base_url()))
        .send()
        .await
        .expect("Failed to purge users");
    assert_eq!(resp.status(), StatusCode::OK);

    let listing: Value = client
        .get(format!("{}/api/users", base_url()))
        .send()
        .await
        .expect("Failed to list users")
        .json()
        .await
        .expect("Failed to read response");
    assert!(listing["data"].as_array().expect("data array").is_empty());
}
