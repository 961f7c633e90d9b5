//! Vendor API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Commerce vendor API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct VendorConfig {
    /// API key; absence is reported per request, not at startup
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Value of the `X-CC-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds (unbounded when unset)
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            api_version: default_api_version(),
            timeout: None,
        }
    }
}

// Keeps the key out of logged configuration dumps.
impl std::fmt::Debug for VendorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl VendorConfig {
    /// API key, treating an empty string as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Charge-creation endpoint
    pub fn charges_url(&self) -> Result<Url, String> {
        self.endpoint(&["charges"])
    }

    /// Charge-lookup endpoint. The id is encoded as a single path segment.
    pub fn charge_url(&self, charge_id: &str) -> Result<Url, String> {
        self.endpoint(&["charges", charge_id])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid vendor API base '{}': {}", self.api_base, e))?;
        url.path_segments_mut()
            .map_err(|_| format!("Vendor API base cannot be a base: {}", self.api_base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Validate vendor configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid vendor API base '{}': {}", self.api_base, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("Unsupported vendor API scheme: {}", url.scheme()));
        }
        if self.api_version.trim().is_empty() {
            return Err("Vendor API version cannot be empty".to_string());
        }
        if self.timeout == Some(0) {
            return Err("Vendor timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
