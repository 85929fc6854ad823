//! The listing record the engine filters and sorts
//!
//! The sync engine never mutates listings; it only filters and orders an
//! externally supplied collection. Beyond the fields used for filtering and
//! sorting (`tags`, `location.city`, `price`, `created_at`) the record is
//! opaque to the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a listing is offered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLocation {
    pub city: String,
}

/// A marketplace listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub location: ListingLocation,
    /// Asking price. Listings without one sort as 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Create a listing with a fresh id and the current timestamp
    pub fn new(
        title: impl Into<String>,
        tags: Vec<String>,
        city: impl Into<String>,
        price: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tags,
            location: ListingLocation { city: city.into() },
            price,
            created_at: Utc::now(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Price as used for ordering; missing prices compare as 0
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tag() {
        let listing = Listing::new("Bike", vec!["sports".into(), "outdoor".into()], "Oslo", None);
        assert!(listing.has_tag("sports"));
        assert!(!listing.has_tag("garden"));
    }

    #[test]
    fn test_missing_price_sorts_as_zero() {
        let listing = Listing::new("Free couch", vec![], "Oslo", None);
        assert_eq!(listing.sort_price(), 0.0);
    }

    #[test]
    fn test_serialization_skips_missing_price() {
        let listing = Listing::new("Free couch", vec![], "Oslo", None);
        let json = serde_json::to_value(&listing).expect("serializes");
        assert!(json.get("price").is_none());
        assert!(json.get("created_at").is_some());
    }
}
