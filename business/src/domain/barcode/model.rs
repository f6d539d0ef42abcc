use serde::{Deserialize, Serialize};

pub const UNKNOWN_SUPPLIER: &str = "Unknown";
pub const NOT_FOUND_DESCRIPTION: &str = "Product not found on Home Depot";

/// One phrasing of a barcode search, tried in order until one matches.
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeQueryAttempt {
    pub query: String,
    pub description: String,
}

impl BarcodeQueryAttempt {
    pub fn new(query: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            description: description.into(),
        }
    }

    /// Builds the ordered query variants for a barcode.
    ///
    /// The raw value goes first, then the same value labelled with its symbology.
    pub fn for_barcode(barcode: &str) -> Vec<Self> {
        vec![
            Self::new(barcode, format!("barcode {}", barcode)),
            Self::new(format!("UPC {}", barcode), format!("UPC {}", barcode)),
        ]
    }
}

/// The provider's top-ranked entry, as loosely as the provider returns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListing {
    pub title: Option<String>,
    /// Already stringified by the adapter, never reformatted.
    pub price: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub availability: Option<String>,
    pub supplier: String,
}

/// Caller-facing product record. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResult {
    pub name: String,
    pub price: String,
    pub category: String,
    pub sku: String,
    pub supplier: String,
    pub url: String,
    pub image_url: String,
    pub description: String,
    pub availability: String,
}

impl ProductResult {
    /// Maps a listing into the caller schema. The sku is always the caller's barcode.
    pub fn from_listing(listing: ProductListing, barcode: &str) -> Self {
        Self {
            name: listing.title.unwrap_or_default(),
            price: listing.price.unwrap_or_default(),
            category: listing.category.unwrap_or_default(),
            sku: barcode.to_string(),
            supplier: listing.supplier,
            url: listing.link.unwrap_or_default(),
            image_url: listing.thumbnail.unwrap_or_default(),
            description: listing.description.unwrap_or_default(),
            availability: listing.availability.unwrap_or_default(),
        }
    }

    /// Placeholder returned whenever a barcode could not be resolved.
    pub fn not_found(barcode: &str) -> Self {
        Self {
            name: format!("Product (UPC: {})", barcode),
            price: String::new(),
            category: String::new(),
            sku: barcode.to_string(),
            supplier: UNKNOWN_SUPPLIER.to_string(),
            url: String::new(),
            image_url: String::new(),
            description: NOT_FOUND_DESCRIPTION.to_string(),
            availability: String::new(),
        }
    }

    #[cfg(test)]
    pub fn is_degraded(&self) -> bool {
        self.supplier == UNKNOWN_SUPPLIER && self.description == NOT_FOUND_DESCRIPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_attempts_in_priority_order() {
        let attempts = BarcodeQueryAttempt::for_barcode("012345678905");

        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].query, "012345678905");
        assert_eq!(attempts[0].description, "barcode 012345678905");
        assert_eq!(attempts[1].query, "UPC 012345678905");
        assert_eq!(attempts[1].description, "UPC 012345678905");
    }

    #[test]
    fn should_map_listing_and_keep_input_barcode_as_sku() {
        let listing = ProductListing {
            title: Some("2x4 Stud".to_string()),
            price: Some("3.98".to_string()),
            category: Some("Lumber".to_string()),
            link: Some("https://example.com/p/1".to_string()),
            thumbnail: Some("https://example.com/p/1.jpg".to_string()),
            description: None,
            availability: Some("In Stock".to_string()),
            supplier: "Home Depot".to_string(),
        };

        let result = ProductResult::from_listing(listing, "012345678905");

        assert_eq!(result.name, "2x4 Stud");
        assert_eq!(result.price, "3.98");
        assert_eq!(result.category, "Lumber");
        assert_eq!(result.sku, "012345678905");
        assert_eq!(result.supplier, "Home Depot");
        assert_eq!(result.url, "https://example.com/p/1");
        assert_eq!(result.image_url, "https://example.com/p/1.jpg");
        assert_eq!(result.description, "");
        assert_eq!(result.availability, "In Stock");
        assert!(!result.is_degraded());
    }

    #[test]
    fn should_fill_every_field_of_not_found_placeholder() {
        let result = ProductResult::not_found("999");

        assert_eq!(result.name, "Product (UPC: 999)");
        assert_eq!(result.sku, "999");
        assert_eq!(result.supplier, "Unknown");
        assert_eq!(result.description, "Product not found on Home Depot");
        assert_eq!(result.price, "");
        assert_eq!(result.url, "");
        assert!(result.is_degraded());
    }

    #[test]
    fn should_serialize_all_keys_even_when_empty() {
        let value = serde_json::to_value(ProductResult::not_found("1")).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "name",
            "price",
            "category",
            "sku",
            "supplier",
            "url",
            "image_url",
            "description",
            "availability",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object.len(), 9);
    }
}
