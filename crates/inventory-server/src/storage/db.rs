//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use inventory_core::ports::ProductStore;
use inventory_core::{InventoryError, NewProduct, Product, ProductId};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, creating schema...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to create products table")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Close every pooled connection. Pending queries finish first.
    pub async fn close(&self) {
        tracing::info!("Closing SQLite database");
        self.pool.close().await;
    }
}

#[async_trait]
impl ProductStore for Database {
    async fn list_products(&self) -> inventory_core::Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, quantity FROM products ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {}", e);
            InventoryError::storage(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn insert_product(&self, product: &NewProduct) -> inventory_core::Result<ProductId> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, quantity)
            VALUES (?1, ?2)
            "#,
        )
        .bind(product.name())
        .bind(product.quantity())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product {:?}: {}", product.name(), e);
            InventoryError::storage(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Product {:?} added (id: {})", product.name(), id);
        Ok(id)
    }

    async fn delete_product(&self, id: ProductId) -> inventory_core::Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete product {}: {}", id, e);
            InventoryError::storage(e)
        })?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete of product {} matched no rows", id);
        } else {
            tracing::info!("Product {} deleted", id);
        }

        Ok(())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i64,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            name: r.name,
            quantity: r.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_temp() -> (Database, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data").join("produtos.db");
        let db = Database::new(&path.to_string_lossy()).await.unwrap();
        (db, temp_dir)
    }

    fn new_product(name: &str, quantity: i64) -> NewProduct {
        NewProduct::new(Some(name.to_string()), Some(quantity)).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let (db, _dir) = open_temp().await;
        assert!(db.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let (db, _dir) = open_temp().await;

        let id = db.insert_product(&new_product("Widget", 5)).await.unwrap();
        let products = db.list_products().await.unwrap();

        assert_eq!(
            products,
            vec![Product {
                id,
                name: "Widget".to_string(),
                quantity: 5,
            }]
        );
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_ordered() {
        let (db, _dir) = open_temp().await;

        let first = db.insert_product(&new_product("A", 1)).await.unwrap();
        let second = db.insert_product(&new_product("A", 1)).await.unwrap();
        assert_ne!(first, second);

        let ids: Vec<ProductId> = db
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (db, _dir) = open_temp().await;
        db.insert_product(&new_product("Widget", 5)).await.unwrap();
        let before = db.list_products().await.unwrap();

        db.delete_product(9999).await.unwrap();

        assert_eq!(db.list_products().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let (db, _dir) = open_temp().await;
        let keep = db.insert_product(&new_product("Keep", 1)).await.unwrap();
        let gone = db.insert_product(&new_product("Gone", 2)).await.unwrap();
        let also_keep = db.insert_product(&new_product("Also", 3)).await.unwrap();

        db.delete_product(gone).await.unwrap();

        let ids: Vec<ProductId> = db
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![keep, also_keep]);

        // Deleting twice stays silent
        db.delete_product(gone).await.unwrap();
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("produtos.db");
        let path = path.to_string_lossy().to_string();

        let db = Database::new(&path).await.unwrap();
        db.insert_product(&new_product("Persisted", 9)).await.unwrap();
        db.close().await;

        let reopened = Database::new(&path).await.unwrap();
        let products = reopened.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Persisted");
        assert_eq!(products[0].quantity, 9);
    }

    #[tokio::test]
    async fn test_closed_pool_reports_storage_error() {
        let (db, _dir) = open_temp().await;
        db.close().await;

        let err = db.list_products().await.unwrap_err();
        assert!(matches!(err, InventoryError::Storage(_)));
    }
}
