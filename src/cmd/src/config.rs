use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// `[products]` table of the config file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Products {
    pub rows: Option<usize>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub row_group_size: Option<usize>,
}

/// `[reviews]` table of the config file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Reviews {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub id_column: Option<String>,
    pub name_column: Option<String>,
    pub category_column: Option<String>,
    pub max_reviews_per_product: Option<usize>,
    pub batch_size: Option<usize>,
    pub seed: Option<u64>,
    pub years_back: Option<u32>,
    pub to_date: Option<String>,
}

/// Values set here are overridden by command line flags.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub products: Products,
    #[serde(default)]
    pub reviews: Reviews,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// No path means an empty config.
    pub fn load_opt(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => Self::load(path),
        }
    }
}
