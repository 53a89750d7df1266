//! Assemble the full application router.

use crate::config::AppConfig;
use crate::docs::{ApiDoc, DOCS_PATH, OPENAPI_PATH};
use crate::middleware::reject_foreign_origin;
use crate::routes::{common_routes, product_routes};
use crate::state::AppState;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware::from_fn_with_state,
    Router,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 100 * 1024;

fn cors_layer(frontend_url: Option<HeaderValue>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);
    match frontend_url {
        Some(origin) => cors.allow_origin(origin),
        None => cors,
    }
}

/// Product API under `/api/products`, service routes, and docs, wrapped in the origin gate, CORS,
/// body limit and request tracing.
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/products", product_routes(state))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(cors_layer(config.frontend_url.clone()))
        .layer(from_fn_with_state(config.frontend_url.clone(), reject_foreign_origin))
        .layer(TraceLayer::new_for_http())
}
