//! Fake commerce API
//!
//! A wiremock server that answers on the vendor's charge endpoints and only
//! matches requests carrying the test API key and version headers.

use charge_gateway::Config;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_BASE_URL: &str = "https://docs.example.com";

pub struct FakeVendor {
    server: MockServer,
}

impl FakeVendor {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Gateway configuration pointed at this server
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.gateway.vendor.api_base = self.server.uri();
        config.gateway.vendor.api_key = Some(TEST_API_KEY.to_string());
        config.gateway.checkout.base_url = Some(TEST_BASE_URL.to_string());
        config
    }

    pub fn config_without_key(&self) -> Config {
        let mut config = self.config();
        config.gateway.vendor.api_key = None;
        config
    }

    /// Answer `POST /charges`
    pub async fn on_create(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/charges"))
            .and(header("X-CC-Api-Key", TEST_API_KEY))
            .and(header("X-CC-Version", "2018-03-22"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `POST /charges` with a body that is not JSON
    pub async fn on_create_text(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/charges"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `GET /charges/{charge_id}`
    pub async fn on_lookup(&self, charge_id: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/charges/{}", charge_id)))
            .and(header("X-CC-Api-Key", TEST_API_KEY))
            .and(header("X-CC-Version", "2018-03-22"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the vendor has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// JSON bodies of every charge-creation request, in arrival order
    pub async fn created_payloads(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == "/charges")
            .filter_map(|request| request.body_json::<Value>().ok())
            .collect()
    }
}
