//! Steppe Core - Shared types library.
//!
//! This crate provides common types used across all Steppe components:
//! - `storefront` - Public-facing booking site
//! - `admin` - Internal administration console
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//! The booking API owns all persistent data; nothing here touches storage.
//!
//! # Modules
//!
//! - [`types`] - Domain entities, type-safe IDs, and the language preference
//! - [`cart`] - The client-side cart store and checkout payload builder

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;
