use arrow::record_batch::RecordBatch;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::CatalogGenError;
use crate::error::Result;
use crate::store::batch_builder::ProductBatchBuilder;
use crate::store::categories::categories;
use crate::store::categories::category_for_id;
use crate::store::categories::Category;
use crate::store::titles::make_title;

pub const PRICE_MIN: f64 = 4.99;
pub const PRICE_MAX: f64 = 999.99;
pub const INVENTORY_MAX: i32 = 250_000;
pub const MARGIN_MIN: f64 = 0.05;
pub const MARGIN_MAX: f64 = 0.75;

const PRICE_SCALE: u32 = 2;
const MARGIN_SCALE: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub category: Category,
    pub name: String,
    pub price: f64,
    pub inventory_count: i32,
    pub margin: f64,
}

pub struct ProductProvider {
    pub products: Vec<Product>,
}

/// Rounds half to even at `scale` decimal places.
pub fn round(v: f64, scale: u32) -> f64 {
    let m = 10f64.powi(scale as i32);
    (v * m).round_ties_even() / m
}

impl ProductProvider {
    /// Generates `rows` products with ids `1..=rows`.
    ///
    /// Titles are drawn row by row first, then the price, inventory and margin
    /// columns are drawn one whole column at a time.
    pub fn generate<R: Rng>(rng: &mut R, rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(CatalogGenError::InvalidConfig(
                "rows must be positive".to_string(),
            ));
        }

        let categories = categories()?;
        debug!("generating {rows} product titles...");
        let mut titles = Vec::with_capacity(rows);
        for id in 1..=rows as i64 {
            let category = category_for_id(&categories, id);
            let base = category.products().choose(rng).copied().ok_or_else(|| {
                CatalogGenError::Internal(format!("category {category} has no products"))
            })?;
            titles.push((id, category, make_title(rng, base)));
        }

        let prices: Vec<f64> = (0..rows)
            .map(|_| round(rng.gen_range(PRICE_MIN..PRICE_MAX), PRICE_SCALE))
            .collect();
        let inventory: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..INVENTORY_MAX)).collect();
        let margins: Vec<f64> = (0..rows)
            .map(|_| round(rng.gen_range(MARGIN_MIN..MARGIN_MAX), MARGIN_SCALE))
            .collect();

        let products = titles
            .into_iter()
            .zip(prices)
            .zip(inventory)
            .zip(margins)
            .map(
                |((((id, category, name), price), inventory_count), margin)| Product {
                    id,
                    category,
                    name,
                    price,
                    inventory_count,
                    margin,
                },
            )
            .collect();

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn record_batch(&self) -> Result<RecordBatch> {
        let mut builder = ProductBatchBuilder::new(self.products.len());
        for product in self.products.iter() {
            builder.write_product(product);
        }

        builder.build_record_batch()
    }
}
