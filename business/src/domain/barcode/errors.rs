use crate::domain::shared::attempts::Recoverable;

/// Failures while resolving a barcode against the product-search provider.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("barcode.config_missing")]
    ConfigMissing,
    #[error("barcode.transport")]
    Transport,
    #[error("barcode.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("barcode.malformed_payload")]
    MalformedPayload,
    #[error("barcode.not_found")]
    NotFound,
}

impl Recoverable for ResolveError {
    /// A bad status or an unexpected body only rules out the current query.
    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ResolveError::UnexpectedStatus(_) | ResolveError::MalformedPayload
        )
    }
}
