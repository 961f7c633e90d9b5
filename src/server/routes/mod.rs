//! HTTP route modules

pub mod charges;

pub use charges::configure_routes;

/// Error response helpers
pub mod errors {
    use crate::utils::error::GatewayError;
    use actix_web::error::{InternalError, QueryPayloadError};
    use actix_web::{HttpRequest, HttpResponse};
    use tracing::{error, warn};

    /// Log a failed request and render its error body
    pub fn gateway_error_to_response(err: GatewayError, dev_mode: bool) -> HttpResponse {
        match &err {
            GatewayError::Validation { message, .. } => {
                warn!(error = %message, "Rejected charge request")
            }
            GatewayError::MethodNotAllowed => {}
            // Already logged where they were raised.
            GatewayError::Config(_) | GatewayError::Upstream { .. } => {}
            other => error!(error = %other, "Charge request failed"),
        }
        err.to_response(dev_mode)
    }

    /// Render an undeserializable query string as a JSON 400
    pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
        let response =
            gateway_error_to_response(GatewayError::validation("Invalid query string"), false);
        InternalError::from_response(err, response).into()
    }

    /// 405 for any method a route does not serve
    pub async fn method_not_allowed() -> HttpResponse {
        GatewayError::MethodNotAllowed.to_response(false)
    }
}
