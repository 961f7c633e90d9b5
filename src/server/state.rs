//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::vendor::VendorTransport;
use crate::services::ChargeService;
use std::sync::Arc;

/// HTTP server state shared across handlers.
///
/// Configuration is read-only after startup; handlers never mutate state.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Charge creation and status lookup
    pub charges: Arc<ChargeService>,
}

impl AppState {
    pub fn new(config: Config, transport: Arc<dyn VendorTransport>) -> Self {
        let charges = ChargeService::new(&config, transport);
        Self {
            config: Arc::new(config),
            charges: Arc::new(charges),
        }
    }

    /// Whether internal error bodies carry diagnostic detail
    pub fn dev_mode(&self) -> bool {
        self.config.server().dev_mode
    }
}
