//! Services module
//!
//! Business logic behind the HTTP routes.

pub mod charges;

pub use charges::ChargeService;
