//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// Enable development mode (echoes diagnostic detail in internal error bodies)
    #[serde(default)]
    pub dev_mode: bool,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_size: default_max_body_size(),
            dev_mode: false,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Workers cannot be 0".to_string());
        }

        Ok(())
    }
}

/// CORS configuration.
///
/// The header values are sent verbatim on every charge route response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Enable CORS headers
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Value of `Access-Control-Allow-Origin`
    #[serde(default = "default_cors_origin")]
    pub allowed_origin: String,
    /// Allowed methods
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    /// Allowed request headers
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
    /// Allow credentials
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origin: default_cors_origin(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// `Access-Control-Allow-Methods` header value
    pub fn methods_header(&self) -> String {
        self.allowed_methods.join(",")
    }

    /// `Access-Control-Allow-Headers` header value
    pub fn headers_header(&self) -> String {
        self.allowed_headers.join(", ")
    }

    /// Validate CORS configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.allowed_origin.trim().is_empty() {
            return Err("CORS allowed origin cannot be empty".to_string());
        }
        if let Some(bad) = self
            .allowed_methods
            .iter()
            .find(|m| m.parse::<actix_web::http::Method>().is_err())
        {
            return Err(format!("Invalid CORS method: {}", bad));
        }
        Ok(())
    }
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "OPTIONS", "PATCH", "DELETE", "POST", "PUT"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    [
        "X-CSRF-Token",
        "X-Requested-With",
        "Accept",
        "Accept-Version",
        "Content-Length",
        "Content-MD5",
        "Content-Type",
        "Date",
        "X-Api-V",
        "Authorization",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect()
}
