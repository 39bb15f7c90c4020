//! Request guards for the admin console.

pub mod auth;

pub use auth::{ACCESS_TOKEN_COOKIE, RedirectToLogin, RequireAdminToken};
