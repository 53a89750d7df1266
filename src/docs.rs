//! OpenAPI document served at `/api-docs/openapi.json` and rendered by Swagger UI at `/docs`.

use crate::error::{ErrorBody, ValidationErrorBody};
use crate::handlers::product;
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::validation::{FieldError, Location};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// `{ "data": Product }`
#[derive(Serialize, ToSchema)]
pub struct ProductBody {
    pub data: Product,
}

/// `{ "data": [Product] }`
#[derive(Serialize, ToSchema)]
pub struct ProductListBody {
    pub data: Vec<Product>,
}

/// `{ "data": "Producto Eliminado" }`
#[derive(Serialize, ToSchema)]
pub struct DeletedBody {
    #[schema(example = "Producto Eliminado")]
    pub data: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Products REST API", description = "API Docs for Products"),
    paths(
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::update_availability,
        product::delete_product,
    ),
    components(schemas(
        Product,
        NewProduct,
        ProductUpdate,
        ProductBody,
        ProductListBody,
        DeletedBody,
        ErrorBody,
        ValidationErrorBody,
        FieldError,
        Location,
    )),
    tags((name = "Products", description = "API operations related to products"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_operation_is_documented() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = &json["paths"];
        for method in ["get", "post"] {
            assert!(paths["/api/products"].get(method).is_some(), "missing {method} /api/products");
        }
        for method in ["get", "put", "patch", "delete"] {
            assert!(paths["/api/products/{id}"].get(method).is_some(), "missing {method} /api/products/{{id}}");
        }
        assert!(json["components"]["schemas"].get("Product").is_some());
    }
}
