//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The booking API
//! hands out plain integer IDs; the wrappers are serde-transparent so the
//! wire format stays a bare number.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use steppe_core::define_id;
/// define_id!(CatalogId);
/// define_id!(FavoriteId);
///
/// let catalog_id = CatalogId::new(1);
/// let favorite_id = FavoriteId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: CatalogId = favorite_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(CatalogId);
define_id!(FavoriteId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = CatalogId::new(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(CatalogId::from(42), id);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = CatalogId::new(7);
        let json = serde_json::to_string(&id).expect("serialize id");
        assert_eq!(json, "7");

        let back: CatalogId = serde_json::from_str("7").expect("deserialize id");
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(FavoriteId::new(3).to_string(), "3");
    }
}
