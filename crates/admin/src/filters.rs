//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a decimal amount as a dollar price string.
///
/// Usage in templates: `{{ catalog.price|usd }}`
#[askama::filter_fn]
pub fn usd(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${amount:.2}"))
}
