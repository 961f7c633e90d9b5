//! Charge service
//!
//! Creates vendor charges and reports their status. Each call performs at
//! most one outbound request and keeps no state between calls.

use crate::config::{CheckoutConfig, Config};
use crate::core::charges::{ChargeRequest, ChargeStatus, PayloadBuilder};
use crate::core::vendor::{CommerceClient, VendorTransport};
use crate::utils::error::{GatewayError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Charge creation and status lookup
#[derive(Clone)]
pub struct ChargeService {
    client: CommerceClient,
    checkout: CheckoutConfig,
}

impl ChargeService {
    pub fn new(config: &Config, transport: Arc<dyn VendorTransport>) -> Self {
        Self {
            client: CommerceClient::new(config.vendor().clone(), transport),
            checkout: config.checkout().clone(),
        }
    }

    /// Create a charge from a raw request body and return the vendor's
    /// response verbatim.
    ///
    /// Not idempotent: identical bodies create distinct charges.
    pub async fn create_charge(&self, body: &[u8]) -> Result<Value> {
        self.client.ensure_configured()?;

        let request = ChargeRequest::from_body(body)?;
        let mode = request.mode();
        let payload = PayloadBuilder::new(&self.checkout).build(request)?;

        info!(mode = mode.as_str(), "Creating charge");
        debug!(%payload, "Charge payload");
        self.client.create_charge(payload).await
    }

    /// Current status of a charge
    pub async fn charge_status(&self, charge_id: Option<&str>) -> Result<ChargeStatus> {
        let charge_id = charge_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GatewayError::validation("Missing chargeId"))?;
        self.client.ensure_configured()?;

        let charge = self.client.get_charge(charge_id).await?;
        let status = ChargeStatus::from_charge(&charge)?;

        info!(charge_id, status = %status.status_name, "Charge status resolved");
        Ok(status)
    }
}
