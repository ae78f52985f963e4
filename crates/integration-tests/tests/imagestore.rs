//! End-to-end tests for the imagestore.
//!
//! These tests require:
//! - The imagestore running (cargo run -p shoplab-imagestore)
//!
//! Run with: cargo test -p shoplab-integration-tests --test imagestore -- --ignored

use reqwest::{
    Client, StatusCode,
    multipart::{Form, Part},
};
use serde_json::Value;

/// Base URL for the imagestore API (configurable via environment).
fn base_url() -> String {
    std::env::var("IMAGESTORE_BASE_URL").unwrap_or_else(|_| "http://localhost:5001".to_string())
}

/// Build a multipart form with one `image` field of `len` bytes.
fn image_form(len: usize, filename: &str, mime: &str) -> Form {
    let part = Part::bytes(vec![0u8; len])
        .file_name(filename.to_string())
        .mime_str(mime)
        .expect("valid mime string");
    Form::new().part("image", part)
}

// ============================================================================
// Upload Filter Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running imagestore server"]
async fn test_missing_file_is_rejected() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/api/images/upload", base_url()))
        .multipart(Form::new().text("note", "no file here"))
        .send()
        .await
        .expect("Failed to send upload");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["error"], "No image file provided");
}

#[tokio::test]
#[ignore = "Requires running imagestore server"]
async fn test_disallowed_type_is_rejected() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/api/images/upload", base_url()))
        .multipart(image_form(1024, "script.pdf", "application/pdf"))
        .send()
        .await
        .expect("Failed to send upload");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(
        body["error"],
        "Invalid file type. Only JPEG, PNG and GIF are allowed."
    );
}

#[tokio::test]
#[ignore = "Requires running imagestore server"]
async fn test_oversized_jpeg_gets_distinct_too_large_error() {
    let client = Client::new();

    let before = listing_count(&client).await;

    // 6 MiB, over the 5 MiB ceiling
    let resp = client
        .post(format!("{}/api/images/upload", base_url()))
        .multipart(image_form(6 * 1024 * 1024, "big.jpg", "image/jpeg"))
        .send()
        .await
        .expect("Failed to send upload");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["error"], "File size too large. Maximum size is 5MB");

    // Nothing was persisted
    assert_eq!(listing_count(&client).await, before);
}

// ============================================================================
// Upload / List / Serve / Delete Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running imagestore server"]
async fn test_valid_png_roundtrip() {
    let client = Client::new();

    // 1 MiB PNG is accepted
    let resp = client
        .post(format!("{}/api/images/upload", base_url()))
        .multipart(image_form(1024 * 1024, "photo.png", "image/png"))
        .send()
        .await
        .expect("Failed to send upload");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["success"], true);
    let filename = body["data"]["filename"].as_str().expect("filename").to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(body["data"]["path"], format!("/uploads/{filename}"));

    // It shows up in the listing
    let listing: Value = client
        .get(format!("{}/api/images", base_url()))
        .send()
        .await
        .expect("Failed to list images")
        .json()
        .await
        .expect("Failed to read response");
    assert!(
        listing["data"]
            .as_array()
            .expect("data array")
            .iter()
            .any(|img| img["filename"] == filename.as_str())
    );

    // And is served as static content
    let resp = client
        .get(format!("{}/uploads/{filename}", base_url()))
        .send()
        .await
        .expect("Failed to fetch static file");
    assert_eq!(resp.status(), StatusCode::OK);

    // Metadata lookup agrees on the size
    let details: Value = client
        .get(format!("{}/api/images/{filename}", base_url()))
        .send()
        .await
        .expect("Failed to fetch metadata")
        .json()
        .await
        .expect("Failed to read response");
    assert_eq!(details["data"]["size"], 1024 * 1024);

    // Delete, then the metadata lookup 404s
    let resp = client
        .delete(format!("{}/api/images/{filename}", base_url()))
        .send()
        .await
        .expect("Failed to delete image");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/api/images/{filename}", base_url()))
        .send()
        .await
        .expect("Failed to fetch metadata");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running imagestore server"]
async fn test_delete_unknown_filename_is_404() {
    let client = Client::new();

    let resp = client
        .delete(format!("{}/api/images/1700000000000-0.png", base_url()))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to read response");
    assert_eq!(body["error"], "Image not found");
}

/// Test helper: current number of listed images.
async fn listing_count(client: &Client) -> usize {
    let listing: Value = client
        .get(format!("{}/api/images", base_url()))
        .send()
        .await
        .expect("Failed to list images")
        .json()
        .await
        .expect("Failed to read response");
    listing["data"].as_array().expect("data array").len()
}
