//! Shared application state for all routes.

use crate::repository::ProductRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new<R>(products: R) -> Self
    where
        R: ProductRepository + 'static,
    {
        Self {
            products: Arc::new(products),
        }
    }
}
