//! Request middleware: validator chains and the cross-origin gate.

use crate::error::AppError;
use crate::extractors::{parse_json_object, JsonObject};
use crate::validation::{RequestInput, RequestValidator, RuleSet};
use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, RawPathParams, Request, State},
    http::{header::ORIGIN, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

/// Run a route's validator chain before its handler.
///
/// All rules run and their failures are returned together as one 400. On success the parsed body
/// is cached in the request extensions for [`JsonObject`] and the original bytes are restored.
pub async fn validate_request(
    State(rules): State<RuleSet>,
    path: Option<RawPathParams>,
    request: Request,
    next: Next,
) -> Response {
    let params: HashMap<String, String> = path
        .map(|p| p.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        .unwrap_or_default();

    let (parts, body) = request.into_parts();
    let bytes = match Bytes::from_request(Request::new(body), &()).await {
        Ok(b) => b,
        Err(rejection) => return AppError::from_body_rejection(rejection).into_response(),
    };
    let body = match parse_json_object(&parts.headers, &bytes) {
        Ok(m) => m,
        Err(e) => return e.into_response(),
    };

    let errors = RequestValidator::check(rules, &RequestInput { params: &params, body: &body });
    if !errors.is_empty() {
        tracing::debug!(path = %parts.uri.path(), errors = errors.len(), "request failed validation");
        return AppError::Validation(errors).into_response();
    }

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(JsonObject(body));
    next.run(request).await
}

/// Reject requests whose `Origin` is not the configured frontend. Requests without `Origin` pass.
pub async fn reject_foreign_origin(
    State(allowed): State<Option<HeaderValue>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(ORIGIN) {
        if allowed.as_ref() != Some(origin) {
            tracing::warn!(origin = ?origin, "cross-origin request denied");
            return AppError::CorsRejected.into_response();
        }
    }
    next.run(request).await
}
