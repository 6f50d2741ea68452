//! Hash-redirect middleware.
//! Sends full-page loads to the client-side router.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::observability::metrics;
use crate::redirect::{RedirectConfig, RedirectResult, RequestDescriptor};

/// Header XHR clients set on script-initiated requests.
pub const X_REQUESTED_WITH: &str = "x-requested-with";

/// State shared by every request. The inner config is swapped on reload.
#[derive(Clone)]
pub struct RedirectState {
    pub config: Arc<ArcSwap<RedirectConfig>>,
}

impl RedirectState {
    pub fn new(config: RedirectConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }
}

/// True when the request carries `X-Requested-With: XMLHttpRequest`.
pub fn is_async_request(headers: &HeaderMap) -> bool {
    headers
        .get(X_REQUESTED_WITH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

/// Path plus query exactly as received.
pub fn full_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string())
}

pub async fn redirect_middleware(
    State(state): State<RedirectState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = full_path(request.uri());
    let descriptor = RequestDescriptor::new(&path, is_async_request(request.headers()));
    let outcome = state.config.load().evaluate(&descriptor);

    metrics::record_decision(outcome.label());
    tracing::debug!(path = %path, outcome = outcome.label(), "Redirect decision");

    match RedirectResult::from(outcome) {
        RedirectResult::NoAction => next.run(request).await,
        RedirectResult::RedirectTo(target) => match HeaderValue::from_str(&target) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(_) => {
                tracing::warn!(target = %target, "Redirect target is not a valid header value");
                next.run(request).await
            }
        },
    }
}
