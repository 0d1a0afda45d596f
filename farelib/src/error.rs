//! Единый тип ошибок публичного API.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FareError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("negative {field}: {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("unknown bus service class: {0}")]
    UnknownServiceClass(String),
}

pub type Result<T> = std::result::Result<T, FareError>;
