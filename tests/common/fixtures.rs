//! Request bodies and vendor documents with sensible defaults

use serde_json::{Value, json};

/// Factory for charge-creation request bodies
pub struct ChargeBodyFactory;

impl ChargeBodyFactory {
    /// Simplified request for a 200 KB upload
    pub fn simplified() -> Value {
        json!({
            "amount": "5.00",
            "currency": "USD",
            "name": "report.pdf",
            "fileSize": 204800,
            "metadata": {"user_id": "u-42"}
        })
    }

    /// Simplified request without one field
    pub fn simplified_without(field: &str) -> Value {
        let mut body = Self::simplified();
        if let Some(map) = body.as_object_mut() {
            map.remove(field);
        }
        body
    }

    pub fn no_price() -> Value {
        json!({
            "name": "Donation",
            "description": "Pay what you want",
            "pricing_type": "no_price"
        })
    }

    /// Vendor-shaped body carrying its own price, without `pricing_type`
    pub fn raw() -> Value {
        json!({
            "name": "Custom",
            "description": "Forwarded as is",
            "local_price": {"amount": "12.00", "currency": "EUR"},
            "metadata": {"order": 7}
        })
    }
}

/// Factory for vendor charge documents
pub struct ChargeDocumentFactory;

impl ChargeDocumentFactory {
    /// Charge with the given timeline statuses, oldest first
    pub fn with_timeline(code: &str, statuses: &[&str]) -> Value {
        let timeline: Vec<Value> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                json!({"status": status, "time": format!("2024-05-01T10:0{}:00Z", i)})
            })
            .collect();
        json!({
            "data": {
                "code": code,
                "hosted_url": format!("https://commerce.example/charges/{}", code),
                "timeline": timeline
            }
        })
    }

    /// Charge with an empty timeline and a record-level status
    pub fn with_status(code: &str, status: &str) -> Value {
        json!({"data": {"code": code, "timeline": [], "status": status}})
    }

    pub fn created(code: &str) -> Value {
        Self::with_timeline(code, &["NEW"])
    }
}
