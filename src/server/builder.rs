//! Server builder and run_server function

use crate::config::Config;
use crate::core::vendor::VendorTransport;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    transport: Option<Arc<dyn VendorTransport>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the HTTP transport used to reach the vendor
    pub fn with_transport(mut self, transport: Arc<dyn VendorTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.transport {
            Some(transport) => Ok(HttpServer::with_transport(&config, transport)),
            None => HttpServer::new(&config),
        }
    }
}

/// Build a server from a loaded configuration and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting {} v{}", crate::NAME, crate::VERSION);

    if config.vendor().api_key().is_none() {
        warn!("COMMERCE_API_KEY is not set; charge requests will fail until it is configured");
    }
    if config.checkout().base_url.is_none() {
        warn!("PUBLIC_BASE_URL is not set; charges will be created without redirect URLs");
    }

    let server = ServerBuilder::new().with_config(config).build()?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /createCharge - Create a charge");
    info!("   GET  /chargeStatus?chargeId=<id> - Charge status");

    server.start().await
}
