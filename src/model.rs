//! The product entity and the input shapes derived from validated request bodies.

use crate::error::AppError;
use crate::validation::{boolean_value, numeric_value, text_value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/products`.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct NewProduct {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
    /// Defaults to `true`.
    #[serde(default = "default_availability")]
    pub availability: bool,
}

/// Body of `PUT /api/products/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ProductUpdate {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

// Only reachable when a body got past a validator chain that does not match the conversion.
fn malformed(field: &str) -> AppError {
    AppError::BadRequest(format!("campo no válido: {}", field))
}

impl NewProduct {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        let availability = match body.get("availability") {
            None => default_availability(),
            v => boolean_value(v).ok_or_else(|| malformed("availability"))?,
        };
        Ok(NewProduct {
            name: text_value(body.get("name")).ok_or_else(|| malformed("name"))?,
            price: numeric_value(body.get("price")).ok_or_else(|| malformed("price"))?,
            availability,
        })
    }
}

impl ProductUpdate {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(ProductUpdate {
            name: text_value(body.get("name")).ok_or_else(|| malformed("name"))?,
            price: numeric_value(body.get("price")).ok_or_else(|| malformed("price"))?,
            availability: boolean_value(body.get("availability")).ok_or_else(|| malformed("availability"))?,
        })
    }
}

impl Product {
    /// Overwrite every mutable field.
    pub fn apply(&mut self, update: ProductUpdate) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}
