//! Error handling for the Gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Message returned to callers for any configuration failure
pub const CONFIG_ERROR_MESSAGE: &str = "Server configuration error";

/// Message returned to callers for unexpected failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Caller input is malformed or incomplete
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// Full list of required fields, when the failure is about missing fields
        required: Option<Vec<String>>,
        /// Fields that were actually missing
        missing: Option<Vec<String>>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The vendor rejected the request
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Method not allowed on a route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body returned to HTTP callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorBody {
    fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
            required: None,
            missing: None,
            details: None,
            message: None,
            stack: None,
        }
    }
}

impl GatewayError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Validation { .. } => StatusCode::BAD_REQUEST,
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is an unexpected failure rather than a classified one
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            GatewayError::HttpClient(_)
                | GatewayError::Serialization(_)
                | GatewayError::Yaml(_)
                | GatewayError::Io(_)
                | GatewayError::Internal(_)
        )
    }

    /// Render the caller-facing body.
    ///
    /// Configuration errors never carry detail. Internal errors carry the
    /// raised message, and a debug rendering under `stack` only when
    /// `dev_mode` is set.
    pub fn to_body(&self, dev_mode: bool) -> ErrorBody {
        match self {
            GatewayError::Validation {
                message,
                required,
                missing,
            } => ErrorBody {
                required: required.clone(),
                missing: missing.clone(),
                ..ErrorBody::new(message.clone())
            },
            GatewayError::Config(_) => ErrorBody::new(CONFIG_ERROR_MESSAGE),
            GatewayError::Upstream {
                message, details, ..
            } => ErrorBody {
                details: details.clone(),
                ..ErrorBody::new(message.clone())
            },
            GatewayError::MethodNotAllowed => ErrorBody::new("Method not allowed"),
            _ => ErrorBody {
                message: Some(self.internal_message()),
                stack: dev_mode.then(|| format!("{:#?}", self)),
                ..ErrorBody::new(INTERNAL_ERROR_MESSAGE)
            },
        }
    }

    /// Render as an HTTP response
    pub fn to_response(&self, dev_mode: bool) -> HttpResponse {
        HttpResponse::build(self.status()).json(self.to_body(dev_mode))
    }

    fn internal_message(&self) -> String {
        match self {
            GatewayError::Internal(msg) => msg.clone(),
            GatewayError::HttpClient(e) => e.to_string(),
            GatewayError::Serialization(e) => e.to_string(),
            GatewayError::Yaml(e) => e.to_string(),
            GatewayError::Io(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(false)
    }
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            required: None,
            missing: None,
        }
    }

    pub fn missing_fields(required: &[&str], missing: Vec<String>) -> Self {
        Self::Validation {
            message: "Missing required fields".to_string(),
            required: Some(required.iter().map(|f| f.to_string()).collect()),
            missing: Some(missing),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn upstream<S: Into<String>>(status: u16, message: S, details: Option<Value>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
