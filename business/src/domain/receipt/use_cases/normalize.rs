use async_trait::async_trait;

use crate::domain::receipt::model::ReceiptResult;

pub struct NormalizeReceiptParams {
    pub image: Vec<u8>,
}

/// Turns a receipt photo into a normalized receipt record. Never fails:
/// any provider or payload problem yields the empty record.
#[async_trait]
pub trait NormalizeReceiptUseCase: Send + Sync {
    async fn execute(&self, params: NormalizeReceiptParams) -> ReceiptResult;
}
