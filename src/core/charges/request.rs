//! Inbound charge-creation requests
//!
//! A request body is parsed into one of three shapes, chosen by which fields
//! are present:
//!
//! - `pricing_type` present: [`ChargeRequest::PricingTyped`], a vendor payload
//!   validated for its pricing type
//! - otherwise `local_price` present: [`ChargeRequest::Raw`], forwarded as is
//! - otherwise: [`ChargeRequest::Simplified`], the `{amount, currency, name,
//!   fileSize, metadata}` shape

use crate::core::tier::PricingTier;
use crate::utils::error::{GatewayError, Result};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Fields a simplified request must carry
pub const REQUIRED_FIELDS: [&str; 3] = ["amount", "currency", "name"];

/// Vendor pricing type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    FixedPrice,
    NoPrice,
}

impl PricingType {
    fn from_value(value: &Value) -> Result<Self> {
        match value.as_str() {
            Some("fixed_price") => Ok(PricingType::FixedPrice),
            Some("no_price") => Ok(PricingType::NoPrice),
            _ => Err(GatewayError::validation(
                "pricing_type must be one of: fixed_price, no_price",
            )),
        }
    }
}

/// Which of the three request shapes was received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeMode {
    Simplified,
    PricingTyped,
    Raw,
}

impl ChargeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeMode::Simplified => "simplified",
            ChargeMode::PricingTyped => "pricing_typed",
            ChargeMode::Raw => "raw",
        }
    }
}

/// The simplified request shape
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedCharge {
    /// Decimal amount, stringified if it arrived as a number
    pub amount: String,
    pub currency: String,
    pub name: String,
    pub description: Option<String>,
    /// `fileSize` exactly as supplied
    pub file_size: Option<Value>,
    pub metadata: Map<String, Value>,
}

impl SimplifiedCharge {
    /// File size in bytes. Accepts numbers and numeric strings.
    pub fn file_size_bytes(&self) -> Option<f64> {
        match self.file_size.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn tier(&self) -> PricingTier {
        PricingTier::from_file_size(self.file_size_bytes())
    }

    fn from_object(mut body: Map<String, Value>) -> Result<Self> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| is_blank(body.get(**field)))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(GatewayError::missing_fields(&REQUIRED_FIELDS, missing));
        }

        let amount = match body.remove("amount") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => number_to_string(&n),
            _ => return Err(GatewayError::validation("amount must be a string or number")),
        };
        let currency = string_field(&mut body, "currency")?;
        let name = string_field(&mut body, "name")?;

        let description = match body.remove("description") {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        };
        let file_size = body.remove("fileSize").filter(|v| !v.is_null());
        let metadata = match body.remove("metadata") {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        Ok(Self {
            amount,
            currency,
            name,
            description,
            file_size,
            metadata,
        })
    }
}

/// A vendor payload that declares its pricing type
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTypedCharge {
    pub pricing_type: PricingType,
    /// The full body, including `pricing_type`
    pub body: Map<String, Value>,
}

/// A parsed charge-creation request
#[derive(Debug, Clone, PartialEq)]
pub enum ChargeRequest {
    Simplified(SimplifiedCharge),
    PricingTyped(PricingTypedCharge),
    Raw(Map<String, Value>),
}

impl ChargeRequest {
    /// Parse a raw HTTP body
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(GatewayError::validation("Request body is required"));
        }
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| GatewayError::validation("Invalid JSON body"))?;
        Self::from_value(value)
    }

    /// Classify and validate a JSON body
    pub fn from_value(value: Value) -> Result<Self> {
        let body = match value {
            Value::Null => return Err(GatewayError::validation("Request body is required")),
            Value::Object(map) => map,
            _ => {
                return Err(GatewayError::validation(
                    "Request body must be a JSON object",
                ));
            }
        };

        if let Some(pricing_type) = body.get("pricing_type") {
            let pricing_type = PricingType::from_value(pricing_type)?;
            return Ok(ChargeRequest::PricingTyped(PricingTypedCharge {
                pricing_type,
                body,
            }));
        }

        if body.contains_key("local_price") {
            return Ok(ChargeRequest::Raw(body));
        }

        SimplifiedCharge::from_object(body).map(ChargeRequest::Simplified)
    }

    pub fn mode(&self) -> ChargeMode {
        match self {
            ChargeRequest::Simplified(_) => ChargeMode::Simplified,
            ChargeRequest::PricingTyped(_) => ChargeMode::PricingTyped,
            ChargeRequest::Raw(_) => ChargeMode::Raw,
        }
    }
}

/// Absent, null, empty, zero and `false` all count as not supplied
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Bool(b)) => !b,
        Some(_) => false,
    }
}

/// Integral floats render without a fractional part: `10.00` becomes `"10"`.
pub(crate) fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() => format!("{}", f),
        _ => n.to_string(),
    }
}

fn string_field(body: &mut Map<String, Value>, field: &str) -> Result<String> {
    match body.remove(field) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(GatewayError::validation(format!(
            "{} must be a string",
            field
        ))),
    }
}
