//! Repository: the narrow interface handlers use to reach persisted products.

mod memory;
mod postgres;

pub use memory::MemoryProductRepository;
pub use postgres::PgProductRepository;

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;

/// Absence is a normal outcome: lookups return `None` and deletes return `false` instead of an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, input: NewProduct) -> Result<Product, AppError>;

    /// All rows ordered by id.
    async fn get_all(&self) -> Result<Vec<Product>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError>;

    /// Persist name, price and availability of `product`. Returns the stored row, or `None` if it no longer exists.
    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError>;

    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
