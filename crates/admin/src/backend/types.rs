//! Request/response types for the booking API management surface.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Login request body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token issued by the booking API on successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// An uploaded file captured from a multipart form.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Catalog fields for create/update submissions.
///
/// `information` is sent to the API as a JSON-encoded string inside the
/// multipart body, one entry per bullet point.
#[derive(Debug, Clone)]
pub struct CatalogFields {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub rating: f32,
    pub information: Vec<String>,
}

/// Testimonial fields for create/update submissions.
#[derive(Debug, Clone)]
pub struct FavoriteFields {
    pub name: String,
    pub text: String,
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_without_token_type() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token": "abc"}"#).expect("deserialize token");
        assert_eq!(token.access_token, "abc");
        assert!(token.token_type.is_none());
    }
}
