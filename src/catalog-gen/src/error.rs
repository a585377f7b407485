use std::result;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

pub type Result<T> = result::Result<T, CatalogGenError>;

#[derive(Error, Debug)]
pub enum CatalogGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("InvalidConfig: {0:?}")]
    InvalidConfig(String),
    #[error("UnsupportedOutput: {0:?}, output must end with .parquet or .csv")]
    UnsupportedOutput(String),
    #[error("ColumnNotFound: {0:?}")]
    ColumnNotFound(String),
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("ArrowError: {0:?}")]
    ArrowError(#[from] ArrowError),
    #[error("ParquetError: {0:?}")]
    ParquetError(#[from] ParquetError),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
}
