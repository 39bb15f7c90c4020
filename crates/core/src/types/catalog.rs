//! Catalog item: a bookable tour/ticket product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::CatalogId;

/// A bookable tour/ticket product record, as served by the booking API.
///
/// The booking API owns these records; the frontend only ever holds
/// transient copies fetched per request (or briefly cached).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Price per person. Crosses the wire as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image path relative to the booking API's upload host.
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered list of information strings shown on the detail page.
    #[serde(default)]
    pub information: Vec<String>,
    #[serde(default)]
    pub location: String,
    /// Rating on a 0-5 scale.
    #[serde(default)]
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        // Integer price, as the booking API serves it.
        let json = r#"{
            "id": 1,
            "title": "Charyn Canyon",
            "description": "Day trip",
            "price": 120,
            "image": "uploads/charyn.webp",
            "information": ["8 hours", "Lunch included"],
            "location": "Almaty",
            "rating": 4.5
        }"#;

        let item: CatalogItem = serde_json::from_str(json).expect("deserialize catalog");
        assert_eq!(item.id, CatalogId::new(1));
        assert_eq!(item.price, Decimal::from(120));
        assert_eq!(item.information.len(), 2);
        assert!((item.rating - 4.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deserialize_minimal_shape() {
        // Optional fields may be absent or null.
        let json = r#"{"id": 2, "title": "City tour", "price": 9.5}"#;
        let item: CatalogItem = serde_json::from_str(json).expect("deserialize catalog");
        assert!(item.image.is_none());
        assert!(item.information.is_empty());
        assert_eq!(item.price.to_string(), "9.5");
    }

    #[test]
    fn test_price_serializes_as_number() {
        let item = CatalogItem {
            id: CatalogId::new(1),
            title: "Tour".to_string(),
            description: String::new(),
            price: Decimal::new(1050, 2),
            image: None,
            information: Vec::new(),
            location: String::new(),
            rating: 0.0,
        };

        let value = serde_json::to_value(&item).expect("serialize catalog");
        assert!(value["price"].is_number());
    }
}
