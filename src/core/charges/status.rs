//! Charge status reduction

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current status of a charge, as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeStatus {
    #[serde(rename = "statusName")]
    pub status_name: String,
}

impl ChargeStatus {
    /// Reduce a vendor charge document to its current status.
    ///
    /// The charge record lives under `data`. The last timeline event wins; an
    /// empty or missing timeline falls back to the record's own `status`.
    pub fn from_charge(charge: &Value) -> Result<Self> {
        let record = charge
            .get("data")
            .filter(|d| d.is_object())
            .unwrap_or(charge);

        let latest = record
            .get("timeline")
            .and_then(Value::as_array)
            .and_then(|timeline| timeline.last());

        let status = match latest {
            Some(event) => event.get("status").and_then(Value::as_str).ok_or_else(|| {
                GatewayError::internal("Latest timeline event has no status")
            })?,
            None => record.get("status").and_then(Value::as_str).ok_or_else(|| {
                GatewayError::internal("Charge response did not include a status")
            })?,
        };

        Ok(Self {
            status_name: status.to_string(),
        })
    }
}
