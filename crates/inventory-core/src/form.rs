//! URL-encoded form payloads posted by the product page

use crate::{NewProduct, ProductId, Result, ValidationError};
use serde::Deserialize;

/// Body of `POST /adicionar_produto`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductForm {
    pub product_name: Option<String>,
    pub product_quantity: Option<String>,
}

impl AddProductForm {
    /// Decode a raw body. The `Content-Type` header is not consulted.
    pub fn decode(body: &[u8]) -> Result<Self> {
        Ok(serde_urlencoded::from_bytes(body)?)
    }

    pub fn into_new_product(self) -> Result<NewProduct> {
        let quantity = self
            .product_quantity
            .as_deref()
            .and_then(parse_leading_int);
        Ok(NewProduct::new(self.product_name, quantity)?)
    }
}

/// Body of `POST /excluir_produto`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductForm {
    pub product_id: Option<String>,
}

impl DeleteProductForm {
    pub fn decode(body: &[u8]) -> Result<Self> {
        Ok(serde_urlencoded::from_bytes(body)?)
    }

    /// The id to delete, or `None` when the submitted value can never
    /// match a row.
    ///
    /// The value is read the way SQLite compares text against an INTEGER
    /// column: integer literals match, integral reals such as `1.0`
    /// match the same id, and anything else matches nothing.
    pub fn product_id(&self) -> Result<Option<ProductId>> {
        let raw = self
            .product_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingId)?;

        Ok(parse_product_id(raw))
    }
}

fn parse_product_id(raw: &str) -> Option<ProductId> {
    if let Ok(id) = raw.parse::<ProductId>() {
        return Some(id);
    }

    let real: f64 = raw.parse().ok()?;
    let in_range = real >= ProductId::MIN as f64 && real < ProductId::MAX as f64;
    (real.is_finite() && real.fract() == 0.0 && in_range).then(|| real as ProductId)
}

/// Lenient integer parsing for form quantities.
///
/// Skips leading whitespace, takes an optional sign and then as many decimal
/// digits as follow; anything after the digits is ignored. Returns `None`
/// when no digit is found. Values beyond the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let digits = &rest[..digits];
    let value = if negative {
        format!("-{}", digits).parse().unwrap_or(i64::MIN)
    } else {
        digits.parse().unwrap_or(i64::MAX)
    };
    Some(value)
}
