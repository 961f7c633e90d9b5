//! HTTP middleware

mod cors;

pub use cors::{CorsHeaders, CorsHeadersService};
