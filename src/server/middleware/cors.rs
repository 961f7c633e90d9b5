//! CORS response headers
//!
//! The charge routes answer every response, preflight or not, with a fixed
//! set of `Access-Control-*` headers taken from [`CorsConfig`].

use crate::config::CorsConfig;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, HeaderName, HeaderValue,
};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::warn;

type HeaderList = Rc<Vec<(HeaderName, HeaderValue)>>;

/// Adds the configured CORS headers to every response
#[derive(Clone)]
pub struct CorsHeaders {
    headers: HeaderList,
}

impl CorsHeaders {
    /// No headers are added when CORS is disabled
    pub fn new(config: &CorsConfig) -> Self {
        let mut headers = Vec::new();

        if config.enabled {
            let candidates = [
                (
                    ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    config.allow_credentials.then(|| "true".to_string()),
                ),
                (
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    Some(config.allowed_origin.clone()),
                ),
                (ACCESS_CONTROL_ALLOW_METHODS, Some(config.methods_header())),
                (ACCESS_CONTROL_ALLOW_HEADERS, Some(config.headers_header())),
            ];

            for (name, value) in candidates {
                let Some(value) = value else { continue };
                match HeaderValue::from_str(&value) {
                    Ok(value) => headers.push((name, value)),
                    Err(e) => warn!(header = %name, error = %e, "Skipping invalid CORS header value"),
                }
            }
        }

        Self {
            headers: Rc::new(headers),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = CorsHeadersService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsHeadersService {
            service,
            headers: Rc::clone(&self.headers),
        }))
    }
}

/// Service implementation for [`CorsHeaders`]
pub struct CorsHeadersService<S> {
    service: S,
    headers: HeaderList,
}

impl<S, B> Service<ServiceRequest> for CorsHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let headers = Rc::clone(&self.headers);
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;

            let response_headers = res.headers_mut();
            for (name, value) in headers.iter() {
                response_headers.insert(name.clone(), value.clone());
            }

            Ok(res)
        })
    }
}
