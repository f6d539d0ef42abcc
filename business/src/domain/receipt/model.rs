use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use super::amounts::{coerce_amount, is_falsy, text_field};
use super::errors::NormalizeError;

pub const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_QUANTITY: f64 = 1.0;
const DEFAULT_AMOUNT: f64 = 0.0;

/// One normalized receipt line. Amounts are never negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptLineItem {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub total: f64,
}

impl ReceiptLineItem {
    fn from_provider_item(item: &Value) -> Result<Self, NormalizeError> {
        let fields = item.as_object().ok_or(NormalizeError::MalformedPayload)?;

        Ok(Self {
            name: text_field(fields.get("description")),
            price: coerce_amount(fields.get("price"), DEFAULT_AMOUNT)?,
            quantity: coerce_amount(fields.get("quantity"), DEFAULT_QUANTITY)?,
            total: coerce_amount(fields.get("total"), DEFAULT_AMOUNT)?,
        })
    }
}

/// The provider's response body, kept exactly as it was received.
///
/// Serializes to the original bytes, or to `{}` when there is no body.
/// Whitespace around the top-level value is not part of it, so a body
/// ending in a newline comes back without that newline.
#[derive(Debug, Clone, Default)]
pub struct RawProviderData(Option<Box<RawValue>>);

impl RawProviderData {
    pub fn new(raw: Box<RawValue>) -> Self {
        Self(Some(raw))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().map(RawValue::get).unwrap_or("{}")
    }

}

impl PartialEq for RawProviderData {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for RawProviderData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(raw) => raw.serialize(serializer),
            None => Map::new().serialize(serializer),
        }
    }
}

/// Caller-facing receipt record. Always structurally complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptResult {
    pub vendor: String,
    pub date: String,
    pub total: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub receipt_number: String,
    pub currency: String,
    pub items: Vec<ReceiptLineItem>,
    pub raw_provider_data: RawProviderData,
}

impl ReceiptResult {
    /// The degraded record returned whenever a receipt cannot be processed.
    pub fn empty() -> Self {
        Self {
            vendor: String::new(),
            date: String::new(),
            total: 0.0,
            subtotal: 0.0,
            tax: 0.0,
            receipt_number: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            items: Vec::new(),
            raw_provider_data: RawProviderData::empty(),
        }
    }

    /// Maps an extraction provider document into the receipt schema.
    ///
    /// Line items keep the provider's order. The raw document is retained verbatim.
    pub fn from_provider_document(raw: Box<RawValue>) -> Result<Self, NormalizeError> {
        let document: Value =
            serde_json::from_str(raw.get()).map_err(|_| NormalizeError::MalformedPayload)?;
        let fields = document
            .as_object()
            .ok_or(NormalizeError::MalformedPayload)?;

        let items = match fields.get("line_items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(line_items)) => line_items
                .iter()
                .map(ReceiptLineItem::from_provider_item)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(NormalizeError::MalformedPayload),
        };

        let vendor = match fields.get("vendor") {
            None | Some(Value::Null) => String::new(),
            Some(Value::Object(vendor)) => text_field(vendor.get("name")),
            Some(empty) if is_falsy(empty) => String::new(),
            // A bare string or list is not a vendor record.
            Some(_) => return Err(NormalizeError::MalformedPayload),
        };

        let currency = match fields.get("currency_code") {
            None | Some(Value::Null) => DEFAULT_CURRENCY.to_string(),
            code => text_field(code),
        };

        Ok(Self {
            vendor,
            date: text_field(fields.get("date")),
            total: coerce_amount(fields.get("total"), DEFAULT_AMOUNT)?,
            subtotal: coerce_amount(fields.get("subtotal"), DEFAULT_AMOUNT)?,
            tax: coerce_amount(fields.get("tax"), DEFAULT_AMOUNT)?,
            receipt_number: text_field(fields.get("receipt_number")),
            currency,
            items,
            raw_provider_data: RawProviderData::new(raw),
        })
    }
}
