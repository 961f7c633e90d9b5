//! Charge domain
//!
//! Parsing of inbound charge requests, construction of the vendor payload,
//! and reduction of a vendor charge to its current status.

pub mod payload;
pub mod request;
pub mod status;

pub use payload::{ChargePayload, LocalPrice, PayloadBuilder};
pub use request::{ChargeMode, ChargeRequest, PricingType, SimplifiedCharge};
pub use status::ChargeStatus;
