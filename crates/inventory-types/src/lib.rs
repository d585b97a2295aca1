//! Inventory Types - Pure type definitions
//!
//! This crate contains only plain data types with no async runtime or
//! database dependencies, so every layer can share them.

pub mod product;

pub use product::*;
