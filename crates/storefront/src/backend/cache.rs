//! Cache types for booking API responses.

use steppe_core::{CatalogItem, FavoriteTestimonial};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Catalog(Box<CatalogItem>),
    Catalogs(Vec<CatalogItem>),
    Favorites(Vec<FavoriteTestimonial>),
}
