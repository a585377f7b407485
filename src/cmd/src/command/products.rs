use std::path::PathBuf;

use arrow::util::pretty::pretty_format_batches;
use bytesize::ByteSize;
use catalog_gen::pipeline::generate_products;
use catalog_gen::pipeline::ProductsConfig;
use clap::Parser;
use tracing::debug;
use tracing::info;

use crate::config;
use crate::error::Result;

pub const DEFAULT_ROWS: usize = 1_000_000;
pub const DEFAULT_OUTPUT: &str = "amazon_like_products.parquet";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROW_GROUP_SIZE: usize = 1_048_576;

const PREVIEW_ROWS: usize = 10;

#[derive(Parser, Clone, Debug, Default)]
pub struct Products {
    /// Number of products [default: 1000000]
    #[arg(long)]
    pub rows: Option<usize>,
    /// Output parquet file [default: amazon_like_products.parquet]
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Random seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,
    /// Max rows per parquet row group [default: 1048576]
    #[arg(long)]
    pub row_group_size: Option<usize>,
    /// TOML config file with a [products] table
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Products {
    pub fn resolve(&self, file: &config::Products) -> ProductsConfig {
        ProductsConfig {
            rows: self.rows.or(file.rows).unwrap_or(DEFAULT_ROWS),
            output: self
                .output
                .clone()
                .or_else(|| file.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            seed: self.seed.or(file.seed).unwrap_or(DEFAULT_SEED),
            row_group_size: self
                .row_group_size
                .or(file.row_group_size)
                .unwrap_or(DEFAULT_ROW_GROUP_SIZE),
        }
    }
}

pub fn run(args: &Products) -> Result<()> {
    let file = config::Config::load_opt(args.config.as_ref())?;
    let cfg = args.resolve(&file.products);
    debug!("products config: {cfg:?}");

    let batch = generate_products(&cfg)?;
    info!("successfully generated!");

    let size: usize = batch
        .columns()
        .iter()
        .map(|c| c.get_array_memory_size())
        .sum();
    let preview = batch.slice(0, batch.num_rows().min(PREVIEW_ROWS));

    println!("Wrote {}", cfg.output.display());
    println!("Schema: {:#?}", batch.schema().fields());
    println!("Rows: {}", batch.num_rows());
    println!("In-memory size: {}", ByteSize::b(size as u64));
    println!("{}", pretty_format_batches(&[preview])?);

    Ok(())
}
