//! Path allow-list middleware.
//!
//! Requests whose path matches none of the allowed patterns are answered with
//! 405 before routing. Requests that pass the gate but hit a method the router
//! does not serve come back as a router-generated 405; that response is
//! rewritten so both rejections share the same `{"detail": ""}` body.
//!
//! Patterns are matched against the percent-decoded path, so `/get/%61bc`
//! is gated as `/get/abc`.

use axum::{
    extract::{Request, State},
    http::{header::ALLOW, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, CONTROLS};
use regex::Regex;

use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;

/// Ordered set of anchored path patterns
#[derive(Debug, Clone)]
pub struct AllowList {
    patterns: Vec<Regex>,
}

impl AllowList {
    /// Compile patterns in order; each must match the whole path to admit it
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<Self, regex::Error> {
        let patterns = patterns
            .into_iter()
            .map(Regex::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// The service's fixed set of reachable paths
    pub fn standard() -> Result<Self, regex::Error> {
        Self::new(routes::ALLOWED_PATHS)
    }

    pub fn allows(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }
}

/// Gate every request on the allow-list and normalize 405 responses
pub async fn gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let raw_path = request.uri().path();
    let path = match percent_decode_str(raw_path).decode_utf8() {
        Ok(path) if state.allow_list.allows(&path) => path.into_owned(),
        _ => {
            tracing::debug!("Rejected path outside allow-list: {} {}", request.method(), raw_path);
            return ApiError::MethodNotAllowed.into_response();
        }
    };

    // Route on the same path the allow-list saw
    if path != request.uri().path() {
        match normalized_uri(request.uri(), &path) {
            Some(uri) => *request.uri_mut() = uri,
            None => {
                tracing::debug!("Rejected path that cannot be re-encoded: {}", path);
                return ApiError::MethodNotAllowed.into_response();
            }
        }
    }

    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    tracing::debug!("Normalizing method-not-allowed response");
    let mut rewritten = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = response.headers().get(ALLOW) {
        rewritten.headers_mut().insert(ALLOW, allow.clone());
    }
    rewritten
}

/// Rebuild `uri` around a decoded path, escaping only what must be escaped
fn normalized_uri(uri: &Uri, path: &str) -> Option<Uri> {
    let encoded = utf8_percent_encode(path, CONTROLS).to_string();
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", encoded, query),
        None => encoded,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}
