use poem_openapi::Object;

use business::domain::barcode::model::ProductResult;

/// Product record for a scanned barcode.
///
/// Always fully populated. A failed lookup is reported with
/// `supplier == "Unknown"` rather than an error status.
#[derive(Debug, Clone, Object)]
pub struct ProductResultResponse {
    /// Product title, or a placeholder embedding the barcode
    pub name: String,
    /// Price exactly as the provider wrote it, empty if unknown
    pub price: String,
    /// Product category
    pub category: String,
    /// The barcode that was looked up
    pub sku: String,
    /// Supplier name, "Unknown" when the lookup failed
    pub supplier: String,
    /// Product page URL
    pub url: String,
    /// Product image URL
    pub image_url: String,
    /// Product description
    pub description: String,
    /// Stock availability
    pub availability: String,
}

impl From<ProductResult> for ProductResultResponse {
    fn from(product: ProductResult) -> Self {
        Self {
            name: product.name,
            price: product.price,
            category: product.category,
            sku: product.sku,
            supplier: product.supplier,
            url: product.url,
            image_url: product.image_url,
            description: product.description,
            availability: product.availability,
        }
    }
}
