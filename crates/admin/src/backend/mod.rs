//! Booking API client for the admin console.
//!
//! This is the privileged management surface: catalog and testimonial
//! CRUD over multipart forms, authenticated per-request with the bearer
//! token the operator obtained at login. Nothing is cached - the console
//! always shows what the API holds right now.

pub mod types;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use steppe_core::{CatalogId, CatalogItem, FavoriteId, FavoriteTestimonial};

use crate::config::BookingApiConfig;
use types::{CatalogFields, FavoriteFields, FileUpload, LoginRequest, TokenResponse};

/// Errors that can occur when talking to the booking API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token was rejected; the operator must log in again.
    #[error("Booking API rejected the access token")]
    Unauthorized,

    /// The API returned a non-success status.
    #[error("API returned {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Client for the booking API's management surface. Cheaply cloneable.
#[derive(Clone)]
pub struct AdminBackendClient {
    inner: Arc<AdminBackendClientInner>,
}

struct AdminBackendClientInner {
    client: reqwest::Client,
    api_url: String,
}

impl AdminBackendClient {
    /// Create a new booking API client.
    #[must_use]
    pub fn new(config: &BookingApiConfig) -> Self {
        Self {
            inner: Arc::new(AdminBackendClientInner {
                client: reqwest::Client::new(),
                api_url: config.api_url.as_str().trim_end_matches('/').to_string(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.api_url)
    }

    /// Read a response body, mapping 401 to `Unauthorized` and other
    /// non-success statuses to errors with the body captured.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Booking API returned non-success status"
            );
            return Err(BackendError::Status {
                status,
                detail: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse booking API response"
            );
            BackendError::Parse(e)
        })
    }

    /// Check a mutation response for success, discarding the body.
    async fn check_status(&self, response: reqwest::Response) -> Result<(), BackendError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Booking API rejected mutation"
            );
            return Err(BackendError::Status {
                status,
                detail: body.chars().take(200).collect(),
            });
        }
        Ok(())
    }

    fn bearer(token: &SecretString) -> String {
        format!("Bearer {}", token.expose_secret())
    }

    /// Build the shared multipart body for catalog create/update.
    ///
    /// `information` rides inside the multipart form as a JSON-encoded
    /// string; the image part is attached only when a file was uploaded.
    fn catalog_form(
        fields: &CatalogFields,
        image: Option<FileUpload>,
    ) -> Result<reqwest::multipart::Form, BackendError> {
        let information = serde_json::to_string(&fields.information)?;

        let mut form = reqwest::multipart::Form::new()
            .text("title", fields.title.clone())
            .text("description", fields.description.clone())
            .text("price", fields.price.to_string())
            .text("location", fields.location.clone())
            .text("rating", fields.rating.to_string())
            .text("information", information);

        if let Some(upload) = image {
            let part = reqwest::multipart::Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }

    /// Build the shared multipart body for testimonial create/update.
    fn favorite_form(
        fields: &FavoriteFields,
        photo: Option<FileUpload>,
    ) -> Result<reqwest::multipart::Form, BackendError> {
        let mut form = reqwest::multipart::Form::new()
            .text("name", fields.name.clone())
            .text("text", fields.text.clone())
            .text("rating", fields.rating.to_string());

        if let Some(upload) = photo {
            let part = reqwest::multipart::Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)?;
            form = form.part("photo", part);
        }

        Ok(form)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in, exchanging operator credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or invalid credentials.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        self.read_json(response).await
    }

    // =========================================================================
    // Catalogs
    // =========================================================================

    /// Get all catalog items.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_catalogs(&self) -> Result<Vec<CatalogItem>, BackendError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("catalogs"))
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Get one catalog item by ID.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` if the item does not exist.
    #[instrument(skip(self), fields(catalog_id = %id))]
    pub async fn get_catalog(&self, id: CatalogId) -> Result<CatalogItem, BackendError> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("catalogs/{id}")))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(format!("Catalog not found: {id}")));
        }

        self.read_json(response).await
    }

    /// Create a catalog item.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the token is rejected, or another
    /// error if the API request fails.
    #[instrument(skip(self, token, fields, image), fields(title = %fields.title))]
    pub async fn create_catalog(
        &self,
        token: &SecretString,
        fields: &CatalogFields,
        image: Option<FileUpload>,
    ) -> Result<(), BackendError> {
        let form = Self::catalog_form(fields, image)?;
        let response = self
            .inner
            .client
            .post(self.endpoint("catalogs"))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .multipart(form)
            .send()
            .await?;
        self.check_status(response).await
    }

    /// Update a catalog item.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the token is rejected, or another
    /// error if the API request fails.
    #[instrument(skip(self, token, fields, image), fields(catalog_id = %id))]
    pub async fn update_catalog(
        &self,
        token: &SecretString,
        id: CatalogId,
        fields: &CatalogFields,
        image: Option<FileUpload>,
    ) -> Result<(), BackendError> {
        let form = Self::catalog_form(fields, image)?;
        let response = self
            .inner
            .client
            .put(self.endpoint(&format!("catalogs/{id}")))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .multipart(form)
            .send()
            .await?;
        self.check_status(response).await
    }

    /// Delete a catalog item.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the token is rejected, or another
    /// error if the API request fails.
    #[instrument(skip(self, token), fields(catalog_id = %id))]
    pub async fn delete_catalog(
        &self,
        token: &SecretString,
        id: CatalogId,
    ) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&format!("catalogs/{id}")))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await?;
        self.check_status(response).await
    }

    // =========================================================================
    // Favorites (testimonials)
    // =========================================================================

    /// Get all favorite testimonials.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_favorites(&self) -> Result<Vec<FavoriteTestimonial>, BackendError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("favorites"))
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Create a testimonial.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the token is rejected, or another
    /// error if the API request fails.
    #[instrument(skip(self, token, fields, photo), fields(name = %fields.name))]
    pub async fn create_favorite(
        &self,
        token: &SecretString,
        fields: &FavoriteFields,
        photo: Option<FileUpload>,
    ) -> Result<(), BackendError> {
        let form = Self::favorite_form(fields, photo)?;
        let response = self
            .inner
            .client
            .post(self.endpoint("favorites"))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .multipart(form)
            .send()
            .await?;
        self.check_status(response).await
    }

    /// Update a testimonial.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the token is rejected, or another
    /// error if the API request fails.
    #[instrument(skip(self, token, fields, photo), fields(favorite_id = %id))]
    pub async fn update_favorite(
        &self,
        token: &SecretString,
        id: FavoriteId,
        fields: &FavoriteFields,
        photo: Option<FileUpload>,
    ) -> Result<(), BackendError> {
        let form = Self::favorite_form(fields, photo)?;
        let response = self
            .inner
            .client
            .put(self.endpoint(&format!("favorites/{id}")))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .multipart(form)
            .send()
            .await?;
        self.check_status(response).await
    }

    /// Delete a testimonial.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the token is rejected, or another
    /// error if the API request fails.
    #[instrument(skip(self, token), fields(favorite_id = %id))]
    pub async fn delete_favorite(
        &self,
        token: &SecretString,
        id: FavoriteId,
    ) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&format!("favorites/{id}")))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await?;
        self.check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_client() -> AdminBackendClient {
        AdminBackendClient::new(&BookingApiConfig {
            api_url: Url::parse("http://127.0.0.1:8000/").expect("parse api url"),
            image_url: Url::parse("http://127.0.0.1:8000/uploads/").expect("parse image url"),
        })
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = test_client();
        assert_eq!(client.endpoint("catalogs/3"), "http://127.0.0.1:8000/catalogs/3");
    }

    #[test]
    fn test_bearer_header_format() {
        let token = SecretString::from("tok123");
        assert_eq!(AdminBackendClient::bearer(&token), "Bearer tok123");
    }
}
