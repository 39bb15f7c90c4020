//! Domain models and session keys for the storefront.

/// Session keys used by the storefront.
///
/// The cart is the only server-held client state: one key, holding the
/// full serialized line list, rewritten on every mutation.
pub mod session_keys {
    /// The booked catalog lines (the cart).
    pub const CART: &str = "booked_catalogs";
}
