//! Utility modules for the charge gateway
//!
//! ## Module Organization
//!
//! - **error**: Error taxonomy and HTTP rendering
//! - **logging**: Tracing subscriber setup
//! - **net**: Pooled HTTP client for outbound calls

pub mod error; // Error handling
pub mod logging; // Logging & monitoring
pub mod net; // Network & client utilities

pub use error::{GatewayError, Result};
