//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated client
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/assets", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_assets() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/assets", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_catalog_roundtrip() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/catalogs/brands", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Test Brand" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let entry_id = body["id"].as_str().expect("No entry ID").to_string();

    // duplicate names are rejected
    let response = client
        .post(format!("{}/catalogs/brands", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Test Brand" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    let response = client
        .delete(format!("{}/catalogs/brands/{}", BASE_URL, entry_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

/// Full lifecycle: register, borrow, reject the duplicate, return,
/// borrow again.
#[tokio::test]
#[ignore]
async fn test_borrow_lifecycle() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Register an asset
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "tag": "TEST-0001",
            "name": "Test Infusion Pump",
            "serial": "SN-TEST-0001"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let asset_id = body["id"].as_str().expect("No asset ID").to_string();

    // Borrow it
    let response = client
        .post(format!("{}/borrows", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "asset_id": asset_id,
            "borrower_name": "Test Borrower",
            "borrower_dept": "ICU",
            "borrower_branch": "Main",
            "start_date": "2024-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let borrow_id = body["id"].as_str().expect("No borrow ID").to_string();
    assert_eq!(body["returned"], false);

    // A second borrow of the same asset is rejected
    let response = client
        .post(format!("{}/borrows", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "asset_id": asset_id,
            "borrower_name": "Another Borrower",
            "borrower_dept": "ER",
            "borrower_branch": "Main"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    // Return it
    let response = client
        .post(format!("{}/borrows/{}/return", BASE_URL, borrow_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["returned"], true);
    assert!(body["end_date"].is_string());

    // Returning twice is rejected
    let response = client
        .post(format!("{}/borrows/{}/return", BASE_URL, borrow_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // The asset can be borrowed again
    let response = client
        .post(format!("{}/borrows", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "asset_id": asset_id,
            "borrower_name": "Test Borrower",
            "borrower_dept": "ICU",
            "borrower_branch": "Main"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    // Cleanup: return the loan and delete the asset
    let body: Value = response.json().await.expect("Failed to parse response");
    let borrow_id = body["id"].as_str().expect("No borrow ID").to_string();
    let _ = client
        .post(format!("{}/borrows/{}/return", BASE_URL, borrow_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/assets/{}", BASE_URL, asset_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_borrow_rejects_bad_date_order() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/borrows", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "asset_id": "00000000-0000-0000-0000-000000000000",
            "borrower_name": "Test Borrower",
            "borrower_dept": "ICU",
            "borrower_branch": "Main",
            "start_date": "2024-01-10",
            "end_date": "2024-01-05"
        }))
        .send()
        .await
        .expect("Failed to send request");

    // rejected before the asset lookup can 404: either way, no write
    assert!(response.status() == 400 || response.status() == 404);
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["assets_total"].is_number());
    assert!(body["open_loans"].is_number());
    assert!(body["overdue_loans"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_report_and_export() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/reports?department=All&branch=All", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());

    let response = client
        .get(format!("{}/reports/export", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    // the signature payload must never appear in the export
    let text = response.text().await.expect("Failed to read body");
    assert!(!text.contains("borrower_signature"));
}

#[tokio::test]
#[ignore]
async fn test_top_departments() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/reports/top-departments", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let ranked = body.as_array().expect("Expected an array");
    assert!(ranked.len() <= 5);
}
