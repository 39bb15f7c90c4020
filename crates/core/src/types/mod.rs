//! Core types for Steppe.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod favorite;
pub mod id;
pub mod language;

pub use catalog::CatalogItem;
pub use favorite::FavoriteTestimonial;
pub use id::*;
pub use language::{LANG_COOKIE_MAX_AGE_DAYS, LANG_COOKIE_NAME, Language};
