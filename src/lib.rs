//! Product API: CRUD over a products table with per-route request validation and Swagger docs.

pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use app::build_app;
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{NewProduct, Product, ProductUpdate};
pub use repository::{MemoryProductRepository, PgProductRepository, ProductRepository};
pub use state::AppState;
pub use store::{ensure_database_exists, reset_schema, sync_schema};
