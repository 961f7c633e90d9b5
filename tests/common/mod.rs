//! Common test utilities for charge-gateway

pub mod fixtures;
pub mod vendor;

pub use fixtures::{ChargeBodyFactory, ChargeDocumentFactory};
pub use vendor::{FakeVendor, TEST_API_KEY, TEST_BASE_URL};

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::{test, web};
use charge_gateway::Config;
use charge_gateway::core::vendor::ReqwestTransport;
use charge_gateway::server::AppState;
use serde_json::Value;
use std::sync::Arc;

/// Application state over the real HTTP transport
pub fn app_state(config: Config) -> web::Data<AppState> {
    let transport = match ReqwestTransport::new(config.vendor()) {
        Ok(transport) => transport,
        Err(e) => panic!("Failed to build transport: {}", e),
    };
    web::Data::new(AppState::new(config, Arc::new(transport)))
}

/// Read a response body as JSON
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let bytes = test::read_body(resp).await;
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => panic!(
            "Body is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&bytes)
        ),
    }
}
