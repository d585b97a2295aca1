//! Storage traits for persistence

use crate::{NewProduct, Product, ProductId, Result};
use async_trait::async_trait;

/// Product store
///
/// Every operation is a single statement against the backing store, so
/// implementations need no transactions.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in storage order (insertion order for SQLite).
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Persist a product and return the id the store assigned to it.
    async fn insert_product(&self, product: &NewProduct) -> Result<ProductId>;

    /// Remove a product. Unknown ids are not an error.
    async fn delete_product(&self, id: ProductId) -> Result<()>;
}
