//! Integration tests for the storefront cart flow.
//!
//! These tests require:
//! - A running booking API with at least one catalog item (id 1)
//! - The storefront server running (cargo run -p steppe-storefront)

use reqwest::{Client, StatusCode};
use steppe_integration_tests::storefront_base_url;

/// Create a client with a cookie store so the session (and the cart in
/// it) survives across requests.
fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running storefront server and booking API"]
async fn test_health() {
    let resp = session_client()
        .get(format!("{}/health", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running storefront server and booking API"]
async fn test_cart_add_then_show() {
    let client = session_client();
    let base_url = storefront_base_url();

    // Establish a session before mutating the cart
    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to load cart page");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("catalog_id", "1")])
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("HX-Trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );

    let body = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to load cart page")
        .text()
        .await
        .expect("body");
    assert!(body.contains("cart-line"), "cart page should show the added line");
}

#[tokio::test]
#[ignore = "Requires running storefront server and booking API"]
async fn test_cart_quantity_zero_removes_line() {
    let client = session_client();
    let base_url = storefront_base_url();

    client
        .post(format!("{base_url}/cart/add"))
        .form(&[("catalog_id", "1")])
        .send()
        .await
        .expect("Failed to add to cart");

    let resp = client
        .post(format!("{base_url}/cart/update"))
        .form(&[("catalog_id", "1"), ("quantity", "0")])
        .send()
        .await
        .expect("Failed to update cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(
        body.contains("Your cart is empty"),
        "zero quantity should empty the cart"
    );
}

#[tokio::test]
#[ignore = "Requires running storefront server and booking API"]
async fn test_cart_is_per_session() {
    let base_url = storefront_base_url();

    let first = session_client();
    first
        .post(format!("{base_url}/cart/add"))
        .form(&[("catalog_id", "1")])
        .send()
        .await
        .expect("Failed to add to cart");

    // A fresh cookie store is a fresh session with an empty cart
    let second = session_client();
    let body = second
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to load cart page")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Your cart is empty"));
}
