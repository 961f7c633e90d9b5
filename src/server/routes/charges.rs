//! Charge endpoints
//!
//! `POST /createCharge` and `GET /chargeStatus`. Both answer `OPTIONS` with an
//! empty 200 and every other method with 405.

use super::errors::{gateway_error_to_response, method_not_allowed, query_error_handler};
use crate::config::CorsConfig;
use crate::server::middleware::CorsHeaders;
use crate::server::state::AppState;
use actix_web::http::Method;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::info;

/// Configure charge routes
pub fn configure_routes(cfg: &mut web::ServiceConfig, cors: &CorsConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::resource("/createCharge")
                .route(web::post().to(create_charge))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed))
                .wrap(CorsHeaders::new(cors)),
        )
        .service(
            web::resource("/chargeStatus")
                .route(web::get().to(charge_status))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed))
                .wrap(CorsHeaders::new(cors)),
        );
}

/// Query parameters of `GET /chargeStatus`
#[derive(Debug, Deserialize)]
pub struct ChargeStatusQuery {
    #[serde(rename = "chargeId")]
    pub charge_id: Option<String>,
}

/// Create a charge and relay the vendor's response with 201
pub async fn create_charge(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> ActixResult<HttpResponse> {
    info!(bytes = body.len(), "Charge creation requested");

    match state.charges.create_charge(&body).await {
        Ok(charge) => Ok(HttpResponse::Created().json(charge)),
        Err(e) => Ok(gateway_error_to_response(e, state.dev_mode())),
    }
}

/// Current status of one charge
pub async fn charge_status(
    state: web::Data<AppState>,
    query: web::Query<ChargeStatusQuery>,
) -> ActixResult<HttpResponse> {
    match state.charges.charge_status(query.charge_id.as_deref()).await {
        Ok(status) => Ok(HttpResponse::Ok().json(status)),
        Err(e) => Ok(gateway_error_to_response(e, state.dev_mode())),
    }
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}
