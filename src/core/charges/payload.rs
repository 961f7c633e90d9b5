//! Outbound charge payload construction

use super::request::{
    number_to_string, ChargeRequest, PricingType, PricingTypedCharge, SimplifiedCharge,
};
use crate::config::CheckoutConfig;
use crate::utils::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Amount used when a fixed-price payload omits one
pub const DEFAULT_AMOUNT: &str = "0.00";
/// Currency used when a fixed-price payload omits one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Price in the merchant's local currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalPrice {
    pub amount: String,
    pub currency: String,
}

/// Charge payload built from a simplified request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargePayload {
    pub name: String,
    pub description: String,
    pub pricing_type: PricingType,
    pub local_price: LocalPrice,
    pub metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

impl ChargePayload {
    /// Build the payload for a simplified request.
    ///
    /// Caller metadata is kept; `file_size`, `tier` and `timestamp` are
    /// written over it. A caller `file_size` is dropped when `fileSize` is
    /// absent, since the tier was not computed from it.
    pub fn from_simplified(
        charge: SimplifiedCharge,
        checkout: &CheckoutConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let tier = charge.tier();

        let mut metadata = charge.metadata;
        match charge.file_size {
            Some(file_size) => metadata.insert("file_size".to_string(), file_size),
            None => metadata.remove("file_size"),
        };
        metadata.insert("tier".to_string(), Value::String(tier.label().to_string()));
        metadata.insert(
            "timestamp".to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        Self {
            name: format!("Document Upload - {}", tier),
            description: charge
                .description
                .unwrap_or_else(|| format!("Payment for document upload ({})", tier)),
            pricing_type: PricingType::FixedPrice,
            local_price: LocalPrice {
                amount: charge.amount,
                currency: charge.currency.to_lowercase(),
            },
            metadata,
            redirect_url: checkout.redirect_url(),
            cancel_url: checkout.cancel_url(),
        }
    }
}

/// Turns parsed requests into the JSON body sent to the vendor
pub struct PayloadBuilder<'a> {
    checkout: &'a CheckoutConfig,
    now: DateTime<Utc>,
}

impl<'a> PayloadBuilder<'a> {
    pub fn new(checkout: &'a CheckoutConfig) -> Self {
        Self::at(checkout, Utc::now())
    }

    /// Builder with a fixed creation time
    pub fn at(checkout: &'a CheckoutConfig, now: DateTime<Utc>) -> Self {
        Self { checkout, now }
    }

    pub fn build(&self, request: ChargeRequest) -> Result<Value> {
        match request {
            ChargeRequest::Simplified(charge) => {
                let payload = ChargePayload::from_simplified(charge, self.checkout, self.now);
                Ok(serde_json::to_value(payload)?)
            }
            ChargeRequest::PricingTyped(charge) => Ok(Value::Object(with_local_price(charge))),
            ChargeRequest::Raw(body) => Ok(Value::Object(body)),
        }
    }
}

/// Fixed-price payloads without a `local_price` get one from the top-level
/// `amount` and `currency`.
fn with_local_price(charge: PricingTypedCharge) -> Map<String, Value> {
    let PricingTypedCharge {
        pricing_type,
        mut body,
    } = charge;

    let has_price = body.get("local_price").is_some_and(|v| !v.is_null());
    if pricing_type == PricingType::FixedPrice && !has_price {
        let amount = match body.get("amount") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => number_to_string(n),
            _ => DEFAULT_AMOUNT.to_string(),
        };
        let currency = match body.get("currency") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => DEFAULT_CURRENCY.to_string(),
        };
        body.insert(
            "local_price".to_string(),
            serde_json::json!({ "amount": amount, "currency": currency }),
        );
    }

    body
}
