//! Integration tests for Steppe.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the booking API, then the two binaries:
//! cargo run -p steppe-storefront
//! cargo run -p steppe-admin
//!
//! # Run integration tests
//! cargo test -p steppe-integration-tests -- --ignored
//! ```
//!
//! Tests that need running servers are `#[ignore]`d by default; the
//! checkout round-trip tests spawn their own stub booking API and run
//! without any external setup.

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin console (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}
