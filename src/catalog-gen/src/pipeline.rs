use std::path::PathBuf;

use arrow::record_batch::RecordBatch;
use chrono::DateTime;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::error::CatalogGenError;
use crate::error::Result;
use crate::sink::open_review_sink;
use crate::sink::write_products;
use crate::sink::Format;
use crate::sink::ReviewSink;
use crate::source::ProductSource;
use crate::source::SourceColumns;
use crate::source::SourceProduct;
use crate::store::products::ProductProvider;
use crate::store::ratings::ReviewCountSampler;
use crate::store::ratings::MAX_REVIEWS_PER_PRODUCT;
use crate::store::reviews::Review;
use crate::store::reviews::ReviewDateSampler;
use crate::store::reviews::ReviewGenerator;

#[derive(Debug, Clone)]
pub struct ProductsConfig {
    pub rows: usize,
    pub output: PathBuf,
    pub seed: u64,
    pub row_group_size: usize,
}

/// Generates the product table, writes it to `cfg.output` and returns it.
pub fn generate_products(cfg: &ProductsConfig) -> Result<RecordBatch> {
    if cfg.rows == 0 {
        return Err(CatalogGenError::InvalidConfig(
            "rows must be positive".to_string(),
        ));
    }
    if cfg.row_group_size == 0 {
        return Err(CatalogGenError::InvalidConfig(
            "row group size must be positive".to_string(),
        ));
    }

    info!("generating {} products with seed {}...", cfg.rows, cfg.seed);
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let products = ProductProvider::generate(&mut rng, cfg.rows)?;
    let batch = products.record_batch()?;

    info!("writing products to {:?}...", cfg.output);
    write_products(&cfg.output, &batch, cfg.row_group_size)?;

    Ok(batch)
}

#[derive(Debug, Clone)]
pub struct ReviewsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: SourceColumns,
    pub max_reviews_per_product: usize,
    pub batch_size: usize,
    pub seed: u64,
    pub years_back: u32,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub products: usize,
    pub reviews: i64,
    pub batches: usize,
}

/// Turns a stream of product batches into review batches.
pub struct ReviewPipeline {
    rng: StdRng,
    gen: ReviewGenerator,
}

impl ReviewPipeline {
    pub fn try_new(
        seed: u64,
        max_reviews_per_product: usize,
        years_back: u32,
        to: DateTime<Utc>,
    ) -> Result<Self> {
        if max_reviews_per_product > MAX_REVIEWS_PER_PRODUCT {
            warn!(
                "max reviews per product {max_reviews_per_product} is above {MAX_REVIEWS_PER_PRODUCT}, clamping"
            );
        }
        let counts = ReviewCountSampler::try_new(max_reviews_per_product)?;
        let dates = ReviewDateSampler::try_new(to, years_back)?;
        debug!(
            "review dates from {} to {} ({})",
            dates.start(),
            to,
            humantime::format_duration(dates.window().to_std().unwrap_or_default())
        );

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            gen: ReviewGenerator::new(counts, dates)?,
        })
    }

    /// Reviews of one product batch, ids continuing from the previous batch.
    pub fn reviews(&mut self, products: &[SourceProduct]) -> Vec<Review> {
        let mut out = Vec::new();
        for product in products {
            self.gen.generate(
                &mut self.rng,
                product.id,
                &product.name,
                &product.category,
                &mut out,
            );
        }

        out
    }

    /// Drains `source` into `sink`. The sink is closed on success only; on error
    /// already flushed parquet row groups stay on disk without a footer.
    pub fn run<I>(&mut self, source: I, sink: &mut dyn ReviewSink) -> Result<Stats>
    where I: Iterator<Item = Result<Vec<SourceProduct>>> {
        let mut stats = Stats::default();
        for products in source {
            let products = products?;
            stats.products += products.len();

            let reviews = self.reviews(&products);
            debug!(
                "{} product(s) -> {} review(s), {} products so far",
                products.len(),
                reviews.len(),
                stats.products
            );
            if reviews.is_empty() {
                continue;
            }
            sink.write(&reviews)?;
            stats.batches += 1;
        }
        sink.close()?;
        stats.reviews = self.gen.emitted();

        Ok(stats)
    }
}

/// Reads products from `cfg.input` and writes their reviews to `cfg.output`.
pub fn generate_reviews(cfg: &ReviewsConfig) -> Result<Stats> {
    // reject bad output paths before touching the input
    let format = Format::try_from_path(&cfg.output)?;
    if cfg.batch_size == 0 {
        return Err(CatalogGenError::InvalidConfig(
            "batch size must be positive".to_string(),
        ));
    }
    debug!("review output format: {format:?}");

    let mut pipeline = ReviewPipeline::try_new(
        cfg.seed,
        cfg.max_reviews_per_product,
        cfg.years_back,
        cfg.to,
    )?;
    let source = ProductSource::try_new(&cfg.input, cfg.columns.clone(), cfg.batch_size)?;
    let mut sink = open_review_sink(&cfg.output)?;

    info!("generating reviews from {:?}...", cfg.input);
    pipeline.run(source, sink.as_mut())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    struct MemSink {
        batches: Vec<Vec<Review>>,
        closed: bool,
    }

    impl ReviewSink for MemSink {
        fn write(&mut self, reviews: &[Review]) -> Result<()> {
            self.batches.push(reviews.to_vec());
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    fn products(n: i64) -> Vec<SourceProduct> {
        (1..=n)
            .map(|id| SourceProduct {
                id,
                name: format!("Product {id}"),
                category: "Electronics".to_string(),
            })
            .collect()
    }

    fn to() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn run(batch_size: usize, max: usize) -> (Stats, MemSink) {
        let mut pipeline = ReviewPipeline::try_new(42, max, 3, to()).unwrap();
        let products = products(250);
        let source = products
            .chunks(batch_size)
            .map(|chunk| Ok(chunk.to_vec()))
            .collect::<Vec<_>>();
        let mut sink = MemSink {
            batches: vec![],
            closed: false,
        };
        let stats = pipeline.run(source.into_iter(), &mut sink).unwrap();

        (stats, sink)
    }

    #[test]
    fn test_batch_size_does_not_change_output() {
        let (stats_a, a) = run(7, 5);
        let (stats_b, b) = run(250, 5);
        assert!(a.closed && b.closed);
        assert_eq!(stats_a.products, 250);
        assert_eq!(stats_a.reviews, stats_b.reviews);

        let a: Vec<Review> = a.batches.into_iter().flatten().collect();
        let b: Vec<Review> = b.batches.into_iter().flatten().collect();
        assert_eq!(a, b);
        for (idx, review) in a.iter().enumerate() {
            assert_eq!(review.review_id, idx as i64 + 1);
        }
    }

    #[test]
    fn test_zero_max_reviews() {
        let (stats, sink) = run(10, 0);
        assert!(sink.closed);
        assert!(sink.batches.is_empty());
        assert_eq!(stats.reviews, 0);
        assert_eq!(stats.batches, 0);
        assert_eq!(stats.products, 250);
    }

    #[test]
    fn test_source_error_aborts() {
        let mut pipeline = ReviewPipeline::try_new(1, 5, 1, to()).unwrap();
        let source = vec![
            Ok(products(3)),
            Err(CatalogGenError::Internal("boom".to_string())),
        ];
        let mut sink = MemSink {
            batches: vec![],
            closed: false,
        };
        assert!(pipeline.run(source.into_iter(), &mut sink).is_err());
        assert!(!sink.closed);
    }
}
