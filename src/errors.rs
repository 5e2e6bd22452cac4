use std::io;

use thiserror::Error;

/// Error type for import, configuration, and runner failures.
///
/// The cleaning and aggregation functions themselves never fail; they return
/// empty results for empty input.
#[derive(Debug, Error)]
pub enum SalesError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported import format '{0}': expected .csv or .json")]
    UnsupportedFormat(String),
    #[error("unknown sales field '{0}'")]
    UnknownField(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
