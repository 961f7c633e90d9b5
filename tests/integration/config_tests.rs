//! Configuration loading from files and the environment

use charge_gateway::Config;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio_test::assert_ok;

const YAML: &str = r#"
server:
  host: 127.0.0.1
  port: 8088
  dev_mode: true
vendor:
  api_base: http://localhost:9999
  timeout: 15
checkout:
  base_url: https://docs.example.com
logging:
  level: debug
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_file_then_environment_overlay() {
    let file = write_config(YAML);
    let config = assert_ok!(Config::from_file(file.path()).await);

    assert_eq!(config.server().address(), "127.0.0.1:8088");
    assert!(config.server().dev_mode);
    assert_eq!(config.vendor().timeout, Some(15));
    assert!(config.vendor().api_key().is_none());

    let env: HashMap<&str, &str> = HashMap::from([
        ("COMMERCE_API_KEY", "from-env"),
        ("GATEWAY_PORT", "9090"),
        ("PUBLIC_BASE_URL", ""),
    ]);
    let gateway = assert_ok!(
        config
            .gateway
            .apply_env(move |key: &str| env.get(key).map(|v| v.to_string()))
    );

    assert_eq!(gateway.vendor.api_key(), Some("from-env"));
    assert_eq!(gateway.server.port, 9090);
    assert_eq!(
        gateway.checkout.base_url.as_deref(),
        Some("https://docs.example.com")
    );
}

#[tokio::test]
async fn test_invalid_file_is_rejected() {
    let file = write_config("server:\n  port: 0\n");
    assert!(Config::from_file(file.path()).await.is_err());

    let file = write_config("vendor:\n  api_base: ftp://example.com\n");
    assert!(Config::from_file(file.path()).await.is_err());
}

#[test]
fn test_debug_output_redacts_api_key() {
    let mut config = Config::default();
    config.gateway.vendor.api_key = Some("super-secret".to_string());

    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[REDACTED]"));
}
