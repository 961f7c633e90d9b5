//! Method handling and CORS headers on the charge routes

use crate::common::{FakeVendor, app_state, read_json};
use actix_web::http::{Method, StatusCode};
use actix_web::test;
use charge_gateway::server::HttpServer;
use serde_json::json;

#[actix_web::test]
async fn test_preflight_returns_empty_ok_with_cors_headers() {
    let vendor = FakeVendor::start().await;
    let app = test::init_service(HttpServer::create_app(app_state(vendor.config()))).await;

    for uri in ["/createCharge", "/chargeStatus"] {
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(uri)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(
            headers.get("Access-Control-Allow-Credentials").unwrap(),
            "true"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "GET,OPTIONS,PATCH,DELETE,POST,PUT"
        );
        assert!(headers.get("Access-Control-Allow-Headers").is_some());
        assert!(test::read_body(resp).await.is_empty());
    }
    assert_eq!(vendor.request_count().await, 0);
}

#[actix_web::test]
async fn test_wrong_methods_are_not_allowed() {
    let vendor = FakeVendor::start().await;
    let app = test::init_service(HttpServer::create_app(app_state(vendor.config()))).await;

    let cases = [
        (Method::GET, "/createCharge"),
        (Method::PUT, "/createCharge"),
        (Method::POST, "/chargeStatus"),
        (Method::DELETE, "/chargeStatus"),
    ];
    for (method, uri) in cases {
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri(uri)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_some());
        assert_eq!(read_json(resp).await, json!({"error": "Method not allowed"}));
    }
    assert_eq!(vendor.request_count().await, 0);
}

#[actix_web::test]
async fn test_cors_can_be_disabled() {
    let vendor = FakeVendor::start().await;
    let mut config = vendor.config();
    config.gateway.server.cors.enabled = false;
    let app = test::init_service(HttpServer::create_app(app_state(config))).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/createCharge")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
}
