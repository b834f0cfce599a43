//! Client-side checks run before a record is sent to the backend.
//!
//! Every check runs independently; failures are reported in field order
//! (type, description, price, stock). Name and dates are not checked.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::VaccineRecord;

static KIND_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÑñ]+$").expect("kind pattern is valid"));

static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZÑñÁÉÍÓÚáéíóúÜü0-9 ]+$").expect("description pattern is valid")
});

/// A single failed field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Type must contain only letters of the alphabet, Ñ included.")]
    InvalidKind,
    #[error("Description must contain only letters, numbers and spaces.")]
    InvalidDescription,
    #[error("Price must be a decimal number greater than 0.")]
    InvalidPrice,
    #[error("Stock must be a whole number greater than 0.")]
    InvalidStock,
}

pub fn is_valid_kind(kind: &str) -> bool {
    KIND_PATTERN.is_match(kind)
}

pub fn is_valid_description(description: &str) -> bool {
    DESCRIPTION_PATTERN.is_match(description)
}

/// Price must parse to a finite number strictly above zero.
pub fn is_valid_price(price: &str) -> bool {
    price
        .trim()
        .parse::<f64>()
        .map(|value| value.is_finite() && value > 0.0)
        .unwrap_or(false)
}

/// Stock must parse to a whole number strictly above zero. Fractional
/// input such as "2.5" is rejected, not truncated.
pub fn is_valid_stock(stock: &str) -> bool {
    stock
        .trim()
        .parse::<i64>()
        .map(|value| value > 0)
        .unwrap_or(false)
}

/// Run every check and collect the failures in field order.
pub fn validate_record(record: &VaccineRecord) -> Vec<FieldError> {
    let checks = [
        (is_valid_kind(&record.kind), FieldError::InvalidKind),
        (
            is_valid_description(&record.description),
            FieldError::InvalidDescription,
        ),
        (is_valid_price(&record.price), FieldError::InvalidPrice),
        (is_valid_stock(&record.stock), FieldError::InvalidStock),
    ];

    checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, error)| error)
        .collect()
}
