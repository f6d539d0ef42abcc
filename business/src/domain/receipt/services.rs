use async_trait::async_trait;
use serde_json::value::RawValue;

use super::errors::NormalizeError;

/// Service port for the external OCR/extraction provider.
///
/// Returns the provider's JSON document untouched; mapping it into the
/// receipt schema is the domain's job.
#[async_trait]
pub trait ReceiptExtractionService: Send + Sync {
    async fn extract(&self, image: &[u8]) -> Result<Box<RawValue>, NormalizeError>;
}
