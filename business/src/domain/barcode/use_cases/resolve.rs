use async_trait::async_trait;

use crate::domain::barcode::model::ProductResult;

pub struct ResolveBarcodeParams {
    pub barcode: String,
}

/// Resolves a barcode into a product record. Never fails: unresolved
/// barcodes come back as a placeholder record.
#[async_trait]
pub trait ResolveBarcodeUseCase: Send + Sync {
    async fn execute(&self, params: ResolveBarcodeParams) -> ProductResult;
}
