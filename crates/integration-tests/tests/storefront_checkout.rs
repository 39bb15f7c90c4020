//! Checkout round-trip tests against a stub booking API.
//!
//! Unlike the other integration tests, these run fully in-process: a
//! stub booking API and the storefront router are spawned on ephemeral
//! ports, so no external servers are needed.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use secrecy::SecretString;
use url::Url;

use steppe_storefront::{
    config::{BookingApiConfig, SentryConfig, StorefrontConfig},
    middleware::create_session_layer,
    routes,
    state::AppState,
};

/// Spawn a router on an ephemeral port and return its address.
async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });
    addr
}

/// Stub booking API: serves one catalog item and answers checkout
/// submissions with a fixed status.
fn stub_booking_api(checkout_status: StatusCode) -> Router {
    Router::new()
        .route(
            "/catalogs/{id}",
            get(|Path(id): Path<i32>| async move {
                Json(serde_json::json!({
                    "id": id,
                    "title": "Charyn Canyon",
                    "description": "Day trip",
                    "price": 120,
                    "image": null,
                    "information": ["8 hours"],
                    "location": "Almaty",
                    "rating": 4.5
                }))
            }),
        )
        .route("/checkout", post(move || async move { checkout_status }))
}

/// Build the storefront app pointed at the given booking API address.
fn storefront_app(api_addr: SocketAddr) -> Router {
    let api_url = Url::parse(&format!("http://{api_addr}/")).expect("Failed to parse API URL");
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("Failed to parse host"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from("x".repeat(32)),
        booking: BookingApiConfig {
            image_url: api_url.join("uploads/").expect("Failed to join URL"),
            api_url,
        },
        sentry: SentryConfig::default(),
    };

    let state = AppState::new(config);
    let session_layer = create_session_layer(state.config());
    routes::routes().layer(session_layer).with_state(state)
}

/// Test helper: client with a session cart holding one line.
async fn client_with_cart(base: &str) -> reqwest::Client {
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let resp = client
        .post(format!("{base}/cart/add"))
        .form(&[("catalog_id", "1")])
        .send()
        .await
        .expect("Failed to add to cart");
    assert!(resp.status().is_success());

    client
}

#[tokio::test]
async fn test_checkout_success_clears_cart() {
    let api_addr = spawn(stub_booking_api(StatusCode::OK)).await;
    let app_addr = spawn(storefront_app(api_addr)).await;
    let base = format!("http://{app_addr}");
    let client = client_with_cart(&base).await;

    let resp = client
        .post(format!("{base}/cart/checkout"))
        .form(&[
            ("name", "Aidos"),
            ("phone_number", "+7 700 000 0000"),
            ("purchase_date", "2026-09-01"),
        ])
        .send()
        .await
        .expect("Failed to submit checkout");
    assert!(resp.status().is_success());

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Booking submitted successfully"));

    // The session cart is gone: a fresh cart page renders empty.
    let body = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .expect("Failed to load cart page")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Your cart is empty"));
    assert!(!body.contains("Charyn Canyon"));
}

#[tokio::test]
async fn test_checkout_failure_keeps_cart() {
    let api_addr = spawn(stub_booking_api(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let app_addr = spawn(storefront_app(api_addr)).await;
    let base = format!("http://{app_addr}");
    let client = client_with_cart(&base).await;

    let resp = client
        .post(format!("{base}/cart/checkout"))
        .form(&[
            ("name", "Aidos"),
            ("phone_number", "+7 700 000 0000"),
            ("purchase_date", "2026-09-01"),
        ])
        .send()
        .await
        .expect("Failed to submit checkout");
    assert!(resp.status().is_success());

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Checkout failed, please try again"));
    assert!(body.contains("Charyn Canyon"));

    // The cart survives for resubmission.
    let body = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .expect("Failed to load cart page")
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Charyn Canyon"));
    assert!(!body.contains("Your cart is empty"));
}
