use serde_json::Value;

use super::{first_of, lookup, num_or_zero, opt_datetime, opt_str, str_list, str_or_empty};
use crate::types::Destination;

/// Candidate locations for the owner id. Newer endpoints flatten it, older
/// ones nest the owner record.
const OWNER_ID_SOURCES: &[&str] = &["owner_id", "owner.id"];

pub(crate) fn destination(raw: &Value) -> Destination {
    Destination {
        uuid: opt_str(lookup(raw, "uuid")),
        name: str_or_empty(lookup(raw, "name")),
        location: str_or_empty(lookup(raw, "location")),
        description: str_or_empty(lookup(raw, "description")),
        price: num_or_zero(lookup(raw, "price")),
        rating: num_or_zero(lookup(raw, "rating")),
        categories: str_list(lookup(raw, "categories")),
        image_urls: str_list(lookup(raw, "image_urls")),
        owner_id: str_or_empty(first_of(raw, OWNER_ID_SOURCES)),
        created_at: opt_datetime(lookup(raw, "created_at")),
        updated_at: opt_datetime(lookup(raw, "updated_at")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_numeric_strings() {
        let dest = destination(&json!({
            "name": "Bromo",
            "price": "100000",
            "rating": "4.9"
        }));
        assert_eq!(dest.price, 100000.0);
        assert_eq!(dest.rating, 4.9);
    }

    #[test]
    fn missing_numerics_become_zero() {
        let dest = destination(&json!({"name": "Bromo"}));
        assert_eq!(dest.price, 0.0);
        assert_eq!(dest.rating, 0.0);
        assert!(dest.categories.is_empty());
        assert!(dest.image_urls.is_empty());
    }

    #[test]
    fn owner_id_resolution_order() {
        let flat = destination(&json!({"owner_id": "flat", "owner": {"id": "nested"}}));
        assert_eq!(flat.owner_id, "flat");

        let nested = destination(&json!({"owner": {"id": "nested"}}));
        assert_eq!(nested.owner_id, "nested");

        let neither = destination(&json!({"name": "Bromo"}));
        assert_eq!(neither.owner_id, "");
    }

    #[test]
    fn idempotent_on_canonical_input() {
        let canonical = Destination {
            uuid: Some("019a7722-3511-710b-9b3f-e77a2b5100b9".to_string()),
            name: "Taman Nasional Bromo".to_string(),
            location: "Jawa Timur".to_string(),
            description: "Lautan pasir".to_string(),
            price: 100000.0,
            rating: 4.9,
            categories: vec!["Alam".to_string()],
            image_urls: vec!["https://example.com/bromo.jpg".to_string()],
            owner_id: "019a7722-3511-710b-9b3f-e77a2b5100b9".to_string(),
            created_at: "2024-01-15T00:00:00Z".parse().ok(),
            updated_at: "2024-01-15T00:00:00Z".parse().ok(),
        };
        let raw = serde_json::to_value(&canonical).unwrap();
        assert_eq!(destination(&raw), canonical);
    }
}
