//! `GET /chargeStatus` round trips

use crate::common::{ChargeDocumentFactory, FakeVendor, app_state, read_json};
use actix_web::http::StatusCode;
use actix_web::test;
use charge_gateway::Config;
use charge_gateway::server::HttpServer;
use serde_json::{Value, json};

async fn get(config: Config, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(HttpServer::create_app(app_state(config))).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, read_json(resp).await)
}

#[actix_web::test]
async fn test_latest_timeline_status_is_reported() {
    let vendor = FakeVendor::start().await;
    vendor
        .on_lookup(
            "ABC123",
            200,
            ChargeDocumentFactory::with_timeline("ABC123", &["NEW", "PENDING", "COMPLETED"]),
        )
        .await;

    let (status, body) = get(vendor.config(), "/chargeStatus?chargeId=ABC123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"statusName": "COMPLETED"}));
}

#[actix_web::test]
async fn test_empty_timeline_uses_record_status() {
    let vendor = FakeVendor::start().await;
    vendor
        .on_lookup("P1", 200, ChargeDocumentFactory::with_status("P1", "PENDING"))
        .await;

    let (status, body) = get(vendor.config(), "/chargeStatus?chargeId=P1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"statusName": "PENDING"}));
}

#[actix_web::test]
async fn test_missing_or_blank_charge_id() {
    let vendor = FakeVendor::start().await;

    for uri in ["/chargeStatus", "/chargeStatus?chargeId=", "/chargeStatus?chargeId=%20%20"] {
        let (status, body) = get(vendor.config(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, json!({"error": "Missing chargeId"}));
    }
    assert_eq!(vendor.request_count().await, 0);
}

#[actix_web::test]
async fn test_charge_id_is_checked_before_api_key() {
    let vendor = FakeVendor::start().await;

    let (status, body) = get(vendor.config_without_key(), "/chargeStatus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing chargeId"}));

    let (status, body) = get(vendor.config_without_key(), "/chargeStatus?chargeId=X").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Server configuration error"}));

    assert_eq!(vendor.request_count().await, 0);
}

#[actix_web::test]
async fn test_unknown_charge_forwards_vendor_status() {
    let vendor = FakeVendor::start().await;
    let error = json!({"type": "not_found", "message": "Not found"});
    vendor
        .on_lookup("NOPE", 404, json!({"error": error}))
        .await;

    let (status, body) = get(vendor.config(), "/chargeStatus?chargeId=NOPE").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found", "details": error}));
}

#[actix_web::test]
async fn test_charge_without_any_status_is_internal_error() {
    let vendor = FakeVendor::start().await;
    vendor
        .on_lookup("ODD", 200, json!({"data": {"code": "ODD", "timeline": []}}))
        .await;

    let mut config = vendor.config();
    config.gateway.server.dev_mode = true;
    let (status, body) = get(config, "/chargeStatus?chargeId=ODD").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["stack"].is_string());
}
