//! Storage layer
//!
//! A single embedded SQLite file holds the product table.

pub mod db;

pub use db::Database;
