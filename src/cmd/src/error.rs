use std::result;

use catalog_gen::error::CatalogGenError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CatalogGen: {0:?}")]
    CatalogGen(#[from] CatalogGenError),
    #[error("Config: {0:?}")]
    Config(#[from] ::config::ConfigError),
    #[error("ArrowError: {0:?}")]
    ArrowError(#[from] arrow::error::ArrowError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
    #[error("BadRequest: {0:?}")]
    BadRequest(String),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
