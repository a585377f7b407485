use std::path::PathBuf;

use catalog_gen::pipeline::generate_reviews;
use catalog_gen::pipeline::ReviewsConfig;
use catalog_gen::source::SourceColumns;
use chrono::DateTime;
use chrono::Utc;
use clap::Parser;
use dateparser::DateTimeUtc;
use tracing::debug;
use tracing::info;

use crate::config;
use crate::error::Error;
use crate::error::Result;

pub const DEFAULT_ID_COLUMN: &str = "id";
pub const DEFAULT_NAME_COLUMN: &str = "product_name";
pub const DEFAULT_CATEGORY_COLUMN: &str = "product_category";
pub const DEFAULT_MAX_REVIEWS_PER_PRODUCT: usize = 5;
pub const DEFAULT_BATCH_SIZE: usize = 100_000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_YEARS_BACK: u32 = 3;

#[derive(Parser, Clone, Debug, Default)]
pub struct Reviews {
    /// Products parquet file
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output file, .parquet or .csv
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// [default: id]
    #[arg(long)]
    pub id_column: Option<String>,
    /// [default: product_name]
    #[arg(long)]
    pub name_column: Option<String>,
    /// Empty string derives categories from product names [default: product_category]
    #[arg(long)]
    pub category_column: Option<String>,
    /// Values above 5 are clamped [default: 5]
    #[arg(long)]
    pub max_reviews_per_product: Option<usize>,
    /// Max products per read batch [default: 100000]
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// Random seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,
    /// Review dates span this many 365-day years [default: 3]
    #[arg(long)]
    pub years_back: Option<u32>,
    /// Latest review date, now if not set
    #[arg(long)]
    pub to_date: Option<String>,
    /// TOML config file with a [reviews] table
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    Ok(s.parse::<DateTimeUtc>()?.0.with_timezone(&Utc))
}

impl Reviews {
    /// `now` anchors the review dates when no `--to-date` is given.
    pub fn resolve(&self, file: &config::Reviews, now: DateTime<Utc>) -> Result<ReviewsConfig> {
        let input = self
            .input
            .clone()
            .or_else(|| file.input.clone())
            .ok_or_else(|| Error::BadRequest("--input is required".to_string()))?;
        let output = self
            .output
            .clone()
            .or_else(|| file.output.clone())
            .ok_or_else(|| Error::BadRequest("--output is required".to_string()))?;

        let category = self
            .category_column
            .clone()
            .or_else(|| file.category_column.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY_COLUMN.to_string());
        let columns = SourceColumns {
            id: self
                .id_column
                .clone()
                .or_else(|| file.id_column.clone())
                .unwrap_or_else(|| DEFAULT_ID_COLUMN.to_string()),
            name: self
                .name_column
                .clone()
                .or_else(|| file.name_column.clone())
                .unwrap_or_else(|| DEFAULT_NAME_COLUMN.to_string()),
            category: (!category.is_empty()).then_some(category),
        };

        let to = match self.to_date.as_ref().or(file.to_date.as_ref()) {
            None => now,
            Some(dt) => parse_date(dt)?,
        };

        Ok(ReviewsConfig {
            input,
            output,
            columns,
            max_reviews_per_product: self
                .max_reviews_per_product
                .or(file.max_reviews_per_product)
                .unwrap_or(DEFAULT_MAX_REVIEWS_PER_PRODUCT),
            batch_size: self
                .batch_size
                .or(file.batch_size)
                .unwrap_or(DEFAULT_BATCH_SIZE),
            seed: self.seed.or(file.seed).unwrap_or(DEFAULT_SEED),
            years_back: self
                .years_back
                .or(file.years_back)
                .unwrap_or(DEFAULT_YEARS_BACK),
            to,
        })
    }
}

pub fn run(args: &Reviews) -> Result<()> {
    let file = config::Config::load_opt(args.config.as_ref())?;
    let cfg = args.resolve(&file.reviews, Utc::now())?;
    debug!("reviews config: {cfg:?}");

    let stats = generate_reviews(&cfg)?;
    info!("successfully generated!");

    println!("Wrote {}", cfg.output.display());
    println!("Products read: {}", stats.products);
    println!("Reviews written: {}", stats.reviews);
    println!("Batches flushed: {}", stats.batches);

    Ok(())
}
