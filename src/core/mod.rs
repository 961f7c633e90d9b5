//! Core functionality for the charge gateway
//!
//! This module contains the charge domain and the vendor API client.

pub mod charges;
pub mod tier;
pub mod vendor;

pub use charges::{ChargeRequest, ChargeStatus, PayloadBuilder};
pub use tier::PricingTier;
pub use vendor::{CommerceClient, ReqwestTransport, VendorTransport};
