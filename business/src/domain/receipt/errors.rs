/// Failures while extracting or normalizing a receipt.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("receipt.config_missing")]
    ConfigMissing,
    #[error("receipt.transport")]
    Transport,
    #[error("receipt.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("receipt.malformed_payload")]
    MalformedPayload,
    #[error("receipt.numeric_coercion")]
    NumericCoercion,
}
