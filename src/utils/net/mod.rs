//! Network utilities
//!
//! This module provides the pooled HTTP client used for outbound vendor calls.

pub mod http;

// Re-export commonly used types and functions
pub use http::*;
