//! Application state shared across admin request handlers.

use std::sync::Arc;

use crate::backend::AdminBackendClient;
use crate::config::AdminConfig;

/// Shared application state. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: AdminBackendClient,
}

impl AppState {
    /// Create application state from configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = AdminBackendClient::new(&config.booking);
        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The booking API management client.
    #[must_use]
    pub fn backend(&self) -> &AdminBackendClient {
        &self.inner.backend
    }

    /// Resolve a stored image path against the image base URL.
    #[must_use]
    pub fn image_url(&self, path: &str) -> String {
        let base = self.inner.config.booking.image_url.as_str();
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BookingApiConfig, SentryConfig};
    use url::Url;

    fn test_state() -> AppState {
        AppState::new(AdminConfig {
            host: "127.0.0.1".parse().expect("valid IP"),
            port: 3001,
            base_url: "http://localhost:3001".to_string(),
            booking: BookingApiConfig {
                api_url: Url::parse("http://localhost:8000").expect("valid URL"),
                image_url: Url::parse("http://localhost:8000/uploads/").expect("valid URL"),
            },
            sentry: SentryConfig {
                dsn: None,
                environment: None,
                sample_rate: 1.0,
                traces_sample_rate: 0.1,
            },
        })
    }

    #[test]
    fn test_image_url_joins_cleanly() {
        let state = test_state();
        assert_eq!(
            state.image_url("/tour.jpg"),
            "http://localhost:8000/uploads/tour.jpg"
        );
        assert_eq!(
            state.image_url("tour.jpg"),
            "http://localhost:8000/uploads/tour.jpg"
        );
    }
}
