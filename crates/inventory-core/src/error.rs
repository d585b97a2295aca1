//! Error types for the inventory

use inventory_types::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InventoryError>;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl InventoryError {
    pub fn storage(e: impl std::fmt::Display) -> Self {
        InventoryError::Storage(e.to_string())
    }
}

impl From<serde_urlencoded::de::Error> for InventoryError {
    fn from(e: serde_urlencoded::de::Error) -> Self {
        InventoryError::Unexpected(format!("malformed form body: {}", e))
    }
}
