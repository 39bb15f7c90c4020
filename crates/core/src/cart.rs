//! The cart store: an ordered list of booked catalog items.
//!
//! The entire cart is held client-side (in the storefront session) until
//! checkout; the booking API sees nothing until the single submission call.
//! `Cart` is a pure value type - the storage boundary lives in the
//! storefront, which persists the full line list back after every mutation.
//!
//! Invariant: a cart never contains a line with quantity zero. Any update
//! that would drive a quantity to zero or below removes the line instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CatalogId, CatalogItem};

/// One catalog item plus a quantity, held client-side until checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CatalogId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: f32,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl From<&CatalogItem> for CartLine {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            price: item.price,
            image: item.image.clone(),
            rating: item.rating,
            quantity: 1,
        }
    }
}

/// Client information entered at checkout time.
///
/// Transient: bundled with the cart lines, submitted once, not retained.
/// Serialized camelCase to match the booking API's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub phone_number: String,
    pub purchase_date: String,
}

/// One checkout line: a cart line paired with a copy of the client info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub id: CatalogId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(rename = "clientInfo")]
    pub client_info: ClientInfo,
}

/// The complete checkout submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
}

/// The cart: an ordered list of lines, one per catalog item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a cart from a persisted line list.
    #[must_use]
    pub const fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the cart, yielding the line list for persistence.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a catalog item: increments the quantity of an existing line,
    /// or appends a new line with quantity 1.
    pub fn upsert(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::from(item));
        }
    }

    /// Set the quantity of a line, clamped to a zero minimum.
    ///
    /// A clamp result of zero removes the line; a zero-quantity line is
    /// never kept. Unknown IDs are ignored.
    pub fn set_quantity(&mut self, id: CatalogId, quantity: i64) {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if clamped == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = clamped;
        }
    }

    /// Remove a line unconditionally.
    pub fn remove(&mut self, id: CatalogId) {
        self.lines.retain(|line| line.id != id);
    }

    /// Sum of price times quantity over all lines. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total number of booked units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Build the checkout payload: every line paired with a copy of the
    /// client info.
    #[must_use]
    pub fn checkout_request(&self, client_info: &ClientInfo) -> CheckoutRequest {
        CheckoutRequest {
            items: self
                .lines
                .iter()
                .map(|line| CheckoutItem {
                    id: line.id,
                    title: line.title.clone(),
                    price: line.price,
                    quantity: line.quantity,
                    client_info: client_info.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_item(id: i32, price: i64) -> CatalogItem {
        CatalogItem {
            id: CatalogId::new(id),
            title: format!("Tour {id}"),
            description: String::new(),
            price: Decimal::from(price),
            image: None,
            information: Vec::new(),
            location: String::new(),
            rating: 4.0,
        }
    }

    #[test]
    fn test_upsert_new_line_starts_at_one() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_upsert_existing_line_increments() {
        let mut cart = Cart::default();
        let item = catalog_item(1, 10);
        cart.upsert(&item);
        cart.upsert(&item);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_upsert_preserves_insertion_order() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(2, 20));
        cart.upsert(&catalog_item(1, 10));
        cart.upsert(&catalog_item(2, 20));
        let ids: Vec<i32> = cart.lines().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_set_quantity_to_zero_removes_line() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        cart.set_quantity(CatalogId::new(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_negative_to_removal() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        cart.set_quantity(CatalogId::new(1), -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        cart.set_quantity(CatalogId::new(99), 3);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_no_mutation_sequence_leaves_zero_quantity() {
        let mut cart = Cart::default();
        let a = catalog_item(1, 10);
        let b = catalog_item(2, 7);
        cart.upsert(&a);
        cart.upsert(&b);
        cart.upsert(&a);
        cart.set_quantity(CatalogId::new(1), 0);
        cart.set_quantity(CatalogId::new(2), -1);
        cart.upsert(&b);
        cart.remove(CatalogId::new(2));
        cart.upsert(&a);

        assert!(cart.lines().iter().all(|line| line.quantity > 0));
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        assert_eq!(Cart::default().total(), Decimal::ZERO);
    }

    #[test]
    fn test_decrement_to_zero_empties_cart() {
        // cart = [{id:1, price:10, qty:2}]; qty -1 -> qty 1, total 10;
        // qty -1 again -> empty cart, total 0.
        let mut cart = Cart::default();
        let item = catalog_item(1, 10);
        cart.upsert(&item);
        cart.upsert(&item);
        assert_eq!(cart.total(), Decimal::from(20));

        cart.set_quantity(CatalogId::new(1), 1);
        assert_eq!(cart.total(), Decimal::from(10));

        cart.set_quantity(CatalogId::new(1), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        cart.upsert(&catalog_item(1, 10));
        cart.upsert(&catalog_item(2, 5));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_checkout_request_pairs_every_line_with_client_info() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        cart.upsert(&catalog_item(2, 5));

        let client = ClientInfo {
            name: "Aidos".to_string(),
            phone_number: "+7 700 000 0000".to_string(),
            purchase_date: "2026-09-01".to_string(),
        };
        let request = cart.checkout_request(&client);

        assert_eq!(request.items.len(), 2);
        assert!(request.items.iter().all(|item| item.client_info == client));
    }

    #[test]
    fn test_checkout_request_wire_format_is_camel_case() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));

        let client = ClientInfo {
            name: "Aidos".to_string(),
            phone_number: "+7 700 000 0000".to_string(),
            purchase_date: "2026-09-01".to_string(),
        };
        let value =
            serde_json::to_value(cart.checkout_request(&client)).expect("serialize checkout");

        let item = &value["items"][0];
        assert!(item["clientInfo"]["phoneNumber"].is_string());
        assert!(item["clientInfo"]["purchaseDate"].is_string());
        assert!(item["price"].is_number());
    }

    #[test]
    fn test_cart_persists_as_plain_line_list() {
        let mut cart = Cart::default();
        cart.upsert(&catalog_item(1, 10));
        let json = serde_json::to_value(&cart).expect("serialize cart");
        assert!(json.is_array());

        let restored: Cart = serde_json::from_value(json).expect("deserialize cart");
        assert_eq!(restored, cart);
    }
}
