//! Booking API client for the storefront.
//!
//! The booking API is the source of truth for catalogs and favorites -
//! NO local sync, direct JSON-over-HTTP calls. Read paths are cached with
//! `moka` (5-minute TTL); the cart never touches the API until checkout.
//!
//! This binary only uses the public surface of the API: listing, detail,
//! checkout submission, and customer auth. The privileged CRUD surface
//! lives in the admin binary.

mod cache;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use moka::future::Cache;
use steppe_core::{CatalogId, CatalogItem, CheckoutRequest, FavoriteTestimonial};

use crate::config::BookingApiConfig;
use cache::CacheValue;
use types::{LoginRequest, RegisterRequest, TokenResponse};

/// Errors that can occur when talking to the booking API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

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

/// Client for the booking API's public surface.
///
/// Cheaply cloneable; catalog and favorite reads are cached for 5 minutes.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    api_url: String,
    cache: Cache<String, CacheValue>,
}

impl BackendClient {
    /// Create a new booking API client.
    #[must_use]
    pub fn new(config: &BookingApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                api_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.api_url)
    }

    /// Read a response body, mapping non-success statuses to errors with
    /// the body captured for diagnostics.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        let body = response.text().await?;

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

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse booking API response"
                );
                Err(BackendError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Get all catalog items.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_catalogs(&self) -> Result<Vec<CatalogItem>, BackendError> {
        let cache_key = "catalogs".to_string();

        if let Some(CacheValue::Catalogs(catalogs)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for catalog list");
            return Ok(catalogs);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint("catalogs"))
            .send()
            .await?;
        let catalogs: Vec<CatalogItem> = self.read_json(response).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Catalogs(catalogs.clone()))
            .await;

        Ok(catalogs)
    }

    /// Get one catalog item by ID.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` if the item does not exist, or
    /// another error if the API request fails.
    #[instrument(skip(self), fields(catalog_id = %id))]
    pub async fn get_catalog(&self, id: CatalogId) -> Result<CatalogItem, BackendError> {
        let cache_key = format!("catalog:{id}");

        if let Some(CacheValue::Catalog(catalog)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for catalog");
            return Ok(*catalog);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("catalogs/{id}")))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(format!("Catalog not found: {id}")));
        }

        let catalog: CatalogItem = self.read_json(response).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Catalog(Box::new(catalog.clone())))
            .await;

        Ok(catalog)
    }

    // =========================================================================
    // Favorite Methods
    // =========================================================================

    /// Get all favorite testimonials.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_favorites(&self) -> Result<Vec<FavoriteTestimonial>, BackendError> {
        let cache_key = "favorites".to_string();

        if let Some(CacheValue::Favorites(favorites)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for favorites list");
            return Ok(favorites);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint("favorites"))
            .send()
            .await?;
        let favorites: Vec<FavoriteTestimonial> = self.read_json(response).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Favorites(favorites.clone()))
            .await;

        Ok(favorites)
    }

    // =========================================================================
    // Checkout (not cached - a single best-effort submission)
    // =========================================================================

    /// Submit a checkout request.
    ///
    /// One best-effort call: no retry, no idempotency key. The caller is
    /// responsible for clearing the cart only on success.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("checkout"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Checkout submission rejected"
            );
            return Err(BackendError::Status {
                status,
                detail: body.chars().take(200).collect(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Log in, exchanging credentials for an opaque access token.
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

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a rejected registration.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("auth/register"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status,
                detail: body.chars().take(200).collect(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_client() -> BackendClient {
        BackendClient::new(&BookingApiConfig {
            api_url: Url::parse("http://127.0.0.1:8000/").expect("parse api url"),
            image_url: Url::parse("http://127.0.0.1:8000/uploads/").expect("parse image url"),
        })
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = test_client();
        assert_eq!(
            client.endpoint("catalogs"),
            "http://127.0.0.1:8000/catalogs"
        );
        assert_eq!(
            client.endpoint("catalogs/7"),
            "http://127.0.0.1:8000/catalogs/7"
        );
    }
}
