//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod checkout;
pub mod gateway;
pub mod logging;
pub mod server;
pub mod vendor;

// Re-export all configuration types
pub use checkout::*;
pub use gateway::*;
pub use logging::*;
pub use server::*;
pub use vendor::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024
}

/// Default vendor API base URL
pub fn default_api_base() -> String {
    "https://api.commerce.coinbase.com".to_string()
}

/// Pinned vendor API version
pub fn default_api_version() -> String {
    "2018-03-22".to_string()
}

pub fn default_success_path() -> String {
    "/upload?status=success".to_string()
}

pub fn default_cancel_path() -> String {
    "/upload?status=canceled".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
