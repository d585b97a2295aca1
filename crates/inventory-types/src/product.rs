//! Product types

use serde::Serialize;
use thiserror::Error;

/// Storage-assigned product identifier (SQLite rowid)
pub type ProductId = i64;

/// An inventory line as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
}

/// A product that passed presence checks and may be inserted.
///
/// The fields are private so the only way to obtain one is through
/// [`NewProduct::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    quantity: i64,
}

/// Reasons a submitted form is rejected before touching storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name is required")]
    MissingName,

    #[error("product quantity is required")]
    MissingQuantity,

    #[error("product id is required")]
    MissingId,
}

impl NewProduct {
    /// Build an insertable product.
    ///
    /// An empty name counts as missing, and so does a zero quantity.
    /// Negative quantities are let through.
    pub fn new(name: Option<String>, quantity: Option<i64>) -> Result<Self, ValidationError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let quantity = quantity
            .filter(|q| *q != 0)
            .ok_or(ValidationError::MissingQuantity)?;

        Ok(Self { name, quantity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_accepts_name_and_quantity() {
        let product = NewProduct::new(Some("Widget".to_string()), Some(5)).unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_new_product_requires_name() {
        assert_eq!(
            NewProduct::new(None, Some(5)),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            NewProduct::new(Some(String::new()), Some(5)),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_new_product_requires_nonzero_quantity() {
        assert_eq!(
            NewProduct::new(Some("Widget".to_string()), None),
            Err(ValidationError::MissingQuantity)
        );
        assert_eq!(
            NewProduct::new(Some("Widget".to_string()), Some(0)),
            Err(ValidationError::MissingQuantity)
        );
    }

    #[test]
    fn test_negative_quantity_is_not_rejected() {
        let product = NewProduct::new(Some("Widget".to_string()), Some(-3)).unwrap();
        assert_eq!(product.quantity(), -3);
    }

    #[test]
    fn test_product_serializes_to_json() {
        let product = Product {
            id: 7,
            name: "Parafuso".to_string(),
            quantity: 120,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Parafuso");
        assert_eq!(json["quantity"], 120);
    }
}
