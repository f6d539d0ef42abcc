use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::barcode::use_cases::resolve::{ResolveBarcodeParams, ResolveBarcodeUseCase};

use crate::api::barcode::dto::ProductResultResponse;
use crate::api::tags::ApiTags;

pub struct BarcodeApi {
    resolve_use_case: Arc<dyn ResolveBarcodeUseCase>,
}

impl BarcodeApi {
    pub fn new(resolve_use_case: Arc<dyn ResolveBarcodeUseCase>) -> Self {
        Self { resolve_use_case }
    }
}

/// Barcode lookup API
#[OpenApi]
impl BarcodeApi {
    /// Look up a material by barcode
    ///
    /// Searches the product catalogue for the scanned barcode. Always answers
    /// 200; an unresolved barcode yields a placeholder with supplier "Unknown".
    #[oai(
        path = "/api/materials/barcode-lookup",
        method = "get",
        tag = "ApiTags::Materials"
    )]
    async fn barcode_lookup(&self, barcode: Query<String>) -> Json<ProductResultResponse> {
        let product = self
            .resolve_use_case
            .execute(ResolveBarcodeParams { barcode: barcode.0 })
            .await;

        Json(product.into())
    }
}
