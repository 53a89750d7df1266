//! Product handlers. Inputs arrive already validated; the only outcome decided here is "not found".

use crate::docs::{DeletedBody, ProductBody, ProductListBody};
use crate::error::{AppError, ErrorBody, ValidationErrorBody};
use crate::extractors::JsonObject;
use crate::model::{NewProduct, ProductUpdate};
use crate::response::{success_created, success_many, success_one};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub const DELETED_MESSAGE: &str = "Producto Eliminado";

/// List every product.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses((status = 200, description = "All products ordered by id", body = ProductListBody))
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.products.get_all().await?;
    Ok(success_many(products))
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductBody),
        (status = 400, description = "Invalid id", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.products.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(success_one(product))
}

/// Create a product. `availability` defaults to true.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = ProductBody),
        (status = 400, description = "Validation errors", body = ValidationErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let input = NewProduct::from_body(&body)?;
    let product = state.products.create(input).await?;
    tracing::info!(id = product.id, "product created");
    Ok(success_created(product))
}

/// Replace name, price and availability of a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Product updated", body = ProductBody),
        (status = 400, description = "Invalid id or body", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let mut product = state.products.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    product.apply(ProductUpdate::from_body(&body)?);
    let product = state.products.update(&product).await?.ok_or(AppError::NotFound)?;
    Ok(success_one(product))
}

/// Flip the availability of a product. The body is ignored.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Availability toggled", body = ProductBody),
        (status = 400, description = "Invalid id", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody)
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let mut product = state.products.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    product.toggle_availability();
    let product = state.products.update(&product).await?.ok_or(AppError::NotFound)?;
    Ok(success_one(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = DeletedBody),
        (status = 400, description = "Invalid id", body = ValidationErrorBody),
        (status = 404, description = "No product with that id", body = ErrorBody)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.products.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    if !state.products.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "product deleted");
    Ok(success_one(DELETED_MESSAGE))
}
