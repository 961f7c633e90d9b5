//! Integration tests for charge-gateway
//!
//! Each test drives the actix application with the real HTTP transport
//! against a fake vendor.

pub mod charge_status_tests;
pub mod config_tests;
pub mod routing_tests;
