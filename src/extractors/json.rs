//! Lenient JSON object body.
//!
//! Bodies are only parsed when the request declares a JSON content type; anything else (including
//! an empty body) reads as `{}`. A body already parsed by the validation middleware is reused.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(parsed) = req.extensions_mut().remove::<JsonObject>() {
            return Ok(parsed);
        }
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(AppError::from_body_rejection)?;
        parse_json_object(&headers, &bytes).map(JsonObject)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

pub fn parse_json_object(headers: &HeaderMap, bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if !is_json(headers) || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest("el cuerpo debe ser un objeto JSON".into())),
        Err(e) => Err(AppError::BadRequest(format!("JSON no válido: {}", e))),
    }
}
