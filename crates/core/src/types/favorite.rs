//! Favorite: a testimonial/review record shown on the storefront.

use serde::{Deserialize, Serialize};

use super::id::FavoriteId;

/// A testimonial/review record, owned by the booking API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteTestimonial {
    pub id: FavoriteId,
    pub name: String,
    /// Photo path relative to the booking API's upload host.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Rating on a 0-5 scale.
    #[serde(default)]
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{"id": 1, "name": "Aigerim", "photo": "favorite/a.jpg", "text": "Great trip", "rating": 5.0}"#;
        let fav: FavoriteTestimonial = serde_json::from_str(json).expect("deserialize favorite");
        assert_eq!(fav.id, FavoriteId::new(1));
        assert_eq!(fav.name, "Aigerim");
        assert!((fav.rating - 5.0).abs() < f32::EPSILON);
    }
}
