//! Checkout callback configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where the vendor sends the payer after checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Public base URL of the web application
    #[serde(default)]
    pub base_url: Option<String>,
    /// Path appended to `base_url` for completed payments
    #[serde(default = "default_success_path")]
    pub success_path: String,
    /// Path appended to `base_url` for abandoned payments
    #[serde(default = "default_cancel_path")]
    pub cancel_path: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            success_path: default_success_path(),
            cancel_path: default_cancel_path(),
        }
    }
}

impl CheckoutConfig {
    pub fn redirect_url(&self) -> Option<String> {
        self.join(&self.success_path)
    }

    pub fn cancel_url(&self) -> Option<String> {
        self.join(&self.cancel_path)
    }

    fn join(&self, path: &str) -> Option<String> {
        let base = self.base_url.as_deref()?.trim().trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(format!("{}{}", base, path))
    }
}
