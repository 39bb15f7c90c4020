//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the booking API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    backend: BackendClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let backend = BackendClient::new(&config.booking);

        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the booking API client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Base URL serving uploaded catalog/favorite images.
    #[must_use]
    pub fn image_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.inner
                .config
                .booking
                .image_url
                .as_str()
                .trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BookingApiConfig, SentryConfig};
    use secrecy::SecretString;
    use url::Url;

    fn test_state() -> AppState {
        AppState::new(StorefrontConfig {
            host: "127.0.0.1".parse().expect("parse host"),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            booking: BookingApiConfig {
                api_url: Url::parse("http://127.0.0.1:8000").expect("parse api url"),
                image_url: Url::parse("http://127.0.0.1:8000/").expect("parse image url"),
            },
            sentry: SentryConfig::default(),
        })
    }

    #[test]
    fn test_image_url_joins_paths() {
        let state = test_state();
        assert_eq!(
            state.image_url("uploads/charyn.webp"),
            "http://127.0.0.1:8000/uploads/charyn.webp"
        );
        assert_eq!(
            state.image_url("/uploads/charyn.webp"),
            "http://127.0.0.1:8000/uploads/charyn.webp"
        );
    }
}
