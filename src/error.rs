use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadflowError {
    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("Standardizer used before being fitted")]
    NotFitted,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, RoadflowError>;
