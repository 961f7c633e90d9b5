//! # charge-gateway
//!
//! A small HTTP gateway in front of a hosted commerce payments API.
//!
//! It exposes two operations to browser clients:
//!
//! - `POST /createCharge` builds a vendor charge from one of three request
//!   shapes and relays the vendor's response.
//! - `GET /chargeStatus?chargeId=<id>` reduces the vendor's charge timeline to
//!   a single status name.
//!
//! The vendor API key never leaves the server. Uploads are labelled with a
//! pricing tier derived from the file size.
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use charge_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     Gateway::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

pub use config::Config;
pub use core::charges::{ChargeMode, ChargeRequest, ChargeStatus};
pub use core::tier::PricingTier;
pub use services::ChargeService;
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The charge gateway
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        let server = server::HttpServer::new(&config)?;
        Ok(Self { config, server })
    }

    /// Run the gateway server until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting charge gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Short commit hash the binary was built from
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

/// Build information captured at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: GIT_HASH,
    }
}
