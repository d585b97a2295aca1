//! Inventory Core Library
//!
//! Error taxonomy, storage ports, form decoding and page rendering for the
//! inventory server. Nothing here touches the network or the database.

// Re-export pure types from inventory-types
pub use inventory_types::*;

pub mod error;
pub mod form;
pub mod ports;
pub mod render;

pub use error::{InventoryError, Result};
pub use form::{AddProductForm, DeleteProductForm};
pub use render::{escape_html, render_page};
