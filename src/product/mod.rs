pub mod handlers;
pub mod model;

pub use model::{NewProduct, Product};

use async_trait::async_trait;

/// Source of products for listing and export.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Active products ordered by name, as sorted by the store.
    async fn active_products(&self) -> Result<Vec<Product>, sqlx::Error>;
}
