use poem::{IntoResponse, Response};
use poem_openapi::payload::Payload;
use poem_openapi::registry::{MetaMediaType, MetaResponse, MetaResponses, MetaSchemaRef, Registry};
use poem_openapi::types::Type;
use poem_openapi::types::multipart::Upload;
use poem_openapi::{ApiResponse, Multipart, Object};

use business::domain::receipt::model::ReceiptResult;

/// Multipart upload of a receipt photo.
#[derive(Debug, Multipart)]
pub struct ReceiptUploadRequest {
    /// Receipt image file
    pub file: Upload,
}

/// A single normalized receipt line.
#[derive(Debug, Clone, Object)]
pub struct ReceiptLineItemResponse {
    /// Line description
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Quantity, 1 when the provider did not report one
    pub quantity: f64,
    /// Line total, never negative
    pub total: f64,
}

/// Normalized receipt.
///
/// Always structurally complete. A failed extraction comes back with
/// zero totals, no items and an empty `raw_provider_data` object.
/// Documents the body written by [`ReceiptJson`].
#[derive(Debug, Clone, Object)]
pub struct ReceiptResultResponse {
    /// Merchant name
    pub vendor: String,
    /// Purchase date as reported by the provider
    pub date: String,
    /// Receipt total
    pub total: f64,
    /// Receipt subtotal
    pub subtotal: f64,
    /// Tax amount
    pub tax: f64,
    /// Receipt number
    pub receipt_number: String,
    /// ISO currency code, "USD" when unknown
    pub currency: String,
    /// Line items in receipt order
    pub items: Vec<ReceiptLineItemResponse>,
    /// Untouched extraction provider response
    pub raw_provider_data: serde_json::Value,
}

/// JSON body of a processed receipt.
///
/// Serialized straight from the domain record, so `raw_provider_data` is
/// written with the provider's exact bytes instead of going through a
/// re-encoded `serde_json::Value`.
pub struct ReceiptJson(pub ReceiptResult);

impl Payload for ReceiptJson {
    const CONTENT_TYPE: &'static str = "application/json; charset=utf-8";

    fn schema_ref() -> MetaSchemaRef {
        ReceiptResultResponse::schema_ref()
    }

    fn register(registry: &mut Registry) {
        ReceiptResultResponse::register(registry);
    }
}

impl IntoResponse for ReceiptJson {
    fn into_response(self) -> Response {
        poem::web::Json(self.0).into_response()
    }
}

impl ApiResponse for ReceiptJson {
    fn meta() -> MetaResponses {
        MetaResponses {
            responses: vec![MetaResponse {
                description: "Normalized receipt",
                status: Some(200),
                status_range: None,
                content: vec![MetaMediaType {
                    content_type: Self::CONTENT_TYPE,
                    schema: Self::schema_ref(),
                }],
                headers: vec![],
            }],
        }
    }

    fn register(registry: &mut Registry) {
        <Self as Payload>::register(registry);
    }
}
