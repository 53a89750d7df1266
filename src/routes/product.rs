//! Product routes. Each route is `[validator chain, handler]`; the chain runs as handler middleware
//! so every rule sees the request before the handler is reachable.

use crate::handlers::{create_product, delete_product, get_product, list_products, update_availability, update_product};
use crate::middleware::validate_request;
use crate::state::AppState;
use crate::validation::{CREATE_PRODUCT, PRODUCT_ID, REPLACE_PRODUCT};
use axum::{handler::Handler, middleware::from_fn_with_state, routing::get, Router};

/// Routes relative to `/api/products`.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_products).post(create_product.layer(from_fn_with_state(CREATE_PRODUCT, validate_request))),
        )
        .route(
            "/:id",
            get(get_product.layer(from_fn_with_state(PRODUCT_ID, validate_request)))
                .put(update_product.layer(from_fn_with_state(REPLACE_PRODUCT, validate_request)))
                .patch(update_availability.layer(from_fn_with_state(PRODUCT_ID, validate_request)))
                .delete(delete_product.layer(from_fn_with_state(PRODUCT_ID, validate_request))),
        )
        .with_state(state)
}
