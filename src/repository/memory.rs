//! In-memory repository. Same contract as the PostgreSQL one; used by tests and `--memory`.

use super::ProductRepository;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryProductRepository {
    table: RwLock<Table>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AppError {
    AppError::Internal("product table lock poisoned".into())
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, input: NewProduct) -> Result<Product, AppError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        table.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: table.last_id,
            name: input.name,
            price: input.price,
            availability: input.availability,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let Some(stored) = table.rows.get_mut(&product.id) else {
            return Ok(None);
        };
        stored.name = product.name.clone();
        stored.price = product.price;
        stored.availability = product.availability;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
