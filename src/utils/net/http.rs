//! Pooled HTTP client for outbound vendor calls
//!
//! One client is built per transport and reused across requests, so TCP/TLS
//! connections and DNS lookups are shared between invocations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use charge_gateway::utils::net::http::build_client;
//!
//! let client = build_client(&HttpClientPoolConfig::default(), None)?;
//! let response = client.get("https://api.commerce.coinbase.com").send().await?;
//! ```

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client pool
#[derive(Debug, Clone)]
pub struct HttpClientPoolConfig {
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// Idle connection timeout
    pub pool_idle_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// TCP keepalive interval
    pub tcp_keepalive: Duration,
    /// User agent string
    pub user_agent: &'static str,
}

impl Default for HttpClientPoolConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            connect_timeout: Duration::from_secs(10),
            tcp_keepalive: Duration::from_secs(60),
            user_agent: concat!("charge-gateway/", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build a pooled client.
///
/// `timeout` bounds the whole request; `None` leaves requests unbounded.
pub fn build_client(
    config: &HttpClientPoolConfig,
    timeout: Option<Duration>,
) -> Result<Client, reqwest::Error> {
    debug!(?timeout, "Building pooled HTTP client");

    let mut builder = ClientBuilder::new()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(config.pool_idle_timeout)
        .connect_timeout(config.connect_timeout)
        .tcp_keepalive(config.tcp_keepalive)
        .tcp_nodelay(true)
        .user_agent(config.user_agent);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
