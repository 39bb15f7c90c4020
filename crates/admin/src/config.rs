//! Admin console configuration from environment variables.
//!
//! Call `AdminConfig::from_env()` once at startup and share the result
//! through application state. The admin console keeps no local state:
//! everything it manages lives behind the booking API.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Admin console configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Host address to bind to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Public base URL of the admin console.
    pub base_url: String,
    /// Booking API endpoints.
    pub booking: BookingApiConfig,
    /// Sentry error tracking.
    pub sentry: SentryConfig,
}

/// Booking API endpoints.
#[derive(Debug, Clone)]
pub struct BookingApiConfig {
    /// Base URL of the booking REST API.
    pub api_url: Url,
    /// Base URL that uploaded images are served from.
    pub image_url: Url,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` file if present (via dotenvy), then reads from
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors - env vars take precedence)
        dotenvy::dotenv().ok();

        let host: IpAddr = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                var: "ADMIN_HOST".to_string(),
                message: format!("invalid IP address: {e}"),
            })?;

        let port: u16 = get_env_or_default("ADMIN_PORT", "3001")
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                var: "ADMIN_PORT".to_string(),
                message: format!("invalid port: {e}"),
            })?;

        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3001");

        let booking = BookingApiConfig {
            api_url: get_required_url("BOOKING_API_URL")?,
            image_url: get_required_url("BOOKING_IMAGE_URL")?,
        };

        let sentry = SentryConfig {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: get_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            traces_sample_rate: get_rate("SENTRY_TRACES_SAMPLE_RATE", 0.1)?,
        };

        Ok(Self {
            host,
            port,
            base_url,
            booking,
            sentry,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn get_env_or_default(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

fn get_required_url(var: &str) -> Result<Url, ConfigError> {
    let value = std::env::var(var).map_err(|_| ConfigError::MissingVar(var.to_string()))?;
    Url::parse(&value).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("invalid URL: {e}"),
    })
}

fn get_rate(var: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(value) = get_optional_env(var) else {
        return Ok(default);
    };
    let rate: f32 = value.parse().map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("invalid rate: {e}"),
    })?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "rate must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(rate)
}
