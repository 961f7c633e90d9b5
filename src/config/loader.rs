//! Configuration loading utilities
//!
//! This module overlays environment variables onto a loaded configuration.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;
use tracing::debug;

pub const ENV_API_KEY: &str = "COMMERCE_API_KEY";
pub const ENV_API_BASE: &str = "COMMERCE_API_BASE";
pub const ENV_API_VERSION: &str = "COMMERCE_API_VERSION";
pub const ENV_API_TIMEOUT: &str = "COMMERCE_API_TIMEOUT";
pub const ENV_PUBLIC_BASE_URL: &str = "PUBLIC_BASE_URL";
pub const ENV_HOST: &str = "GATEWAY_HOST";
pub const ENV_PORT: &str = "GATEWAY_PORT";
pub const ENV_WORKERS: &str = "GATEWAY_WORKERS";
pub const ENV_DEV_MODE: &str = "GATEWAY_DEV_MODE";
pub const ENV_LOG_LEVEL: &str = "GATEWAY_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "GATEWAY_LOG_JSON";

impl GatewayConfig {
    /// Overlay values from `lookup`. Empty values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Vendor configuration
        if let Some(api_key) = get(ENV_API_KEY) {
            self.vendor.api_key = Some(api_key);
        }
        if let Some(api_base) = get(ENV_API_BASE) {
            self.vendor.api_base = api_base;
        }
        if let Some(api_version) = get(ENV_API_VERSION) {
            self.vendor.api_version = api_version;
        }
        if let Some(timeout) = get(ENV_API_TIMEOUT) {
            self.vendor.timeout = Some(parse(ENV_API_TIMEOUT, &timeout)?);
        }

        // Checkout configuration
        if let Some(base_url) = get(ENV_PUBLIC_BASE_URL) {
            self.checkout.base_url = Some(base_url);
        }

        // Server configuration
        if let Some(host) = get(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.server.port = parse(ENV_PORT, &port)?;
        }
        if let Some(workers) = get(ENV_WORKERS) {
            self.server.workers = Some(parse(ENV_WORKERS, &workers)?);
        }
        if let Some(dev_mode) = get(ENV_DEV_MODE) {
            self.server.dev_mode = parse_bool(ENV_DEV_MODE, &dev_mode)?;
        }

        // Logging configuration
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(json) = get(ENV_LOG_JSON) {
            self.logging.json = parse_bool(ENV_LOG_JSON, &json)?;
        }

        Ok(self)
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", key, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "development" => Ok(true),
        "false" | "0" | "no" | "off" | "production" => Ok(false),
        other => Err(GatewayError::Config(format!(
            "Invalid {}: expected a boolean, got '{}'",
            key, other
        ))),
    }
}
