//! Wire types for the booking API's auth endpoints.
//!
//! Catalog, favorite, and checkout shapes live in `steppe-core`; only the
//! auth request/response bodies are specific to this client.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Token issued by the booking API on login.
///
/// The token is opaque to this frontend: it is stored in a cookie and
/// checked only for presence. Verification is the API's job.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_shape() {
        let json = r#"{"access_token": "abc123", "token_type": "bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).expect("deserialize token");
        assert_eq!(token.access_token, "abc123");
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
    }
}
