//! HTTP handlers for products and service endpoints.

pub mod common;
pub mod product;
pub use common::*;
pub use product::*;
