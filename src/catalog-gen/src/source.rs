use std::fs::File;
use std::path::Path;

use arrow::array::Array;
use arrow::array::AsArray;
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::datatypes::Int64Type;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ArrowReaderMetadata;
use parquet::arrow::arrow_reader::ArrowReaderOptions;
use parquet::arrow::arrow_reader::ParquetRecordBatchReader;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;
use tracing::debug;
use tracing::warn;

use crate::error::CatalogGenError;
use crate::error::Result;
use crate::store::ratings::coerce_category;
use crate::store::ratings::GENERAL_CATEGORY;

/// Names of the product file columns the review generator reads.
#[derive(Debug, Clone)]
pub struct SourceColumns {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
}

/// A product as seen by the review generator. `category` is already mapped
/// onto the bias table.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceProduct {
    pub id: i64,
    pub name: String,
    pub category: String,
}

/// Pseudo-category for files without a category column: the part of the name
/// before the first underscore.
pub fn derive_category(name: &str) -> &str {
    name.split_once('_')
        .map(|(head, _)| head)
        .unwrap_or(GENERAL_CATEGORY)
}

/// Streams products from a parquet file one row group at a time, each row
/// group split into batches of at most `batch_size` rows.
pub struct ProductSource {
    file: File,
    metadata: ArrowReaderMetadata,
    projection: ProjectionMask,
    columns: SourceColumns,
    batch_size: usize,
    row_group: usize,
    reader: Option<ParquetRecordBatchReader>,
}

impl ProductSource {
    pub fn try_new<P: AsRef<Path>>(
        path: P,
        mut columns: SourceColumns,
        batch_size: usize,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(CatalogGenError::InvalidConfig(
                "batch size must be positive".to_string(),
            ));
        }

        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| CatalogGenError::FileNotFound(format!("can't open {path:?}: {err}")))?;
        let metadata = ArrowReaderMetadata::load(&file, ArrowReaderOptions::new())?;
        let schema = metadata.schema().clone();

        let mut indices = Vec::with_capacity(3);
        for name in [&columns.id, &columns.name] {
            let idx = schema.index_of(name).map_err(|_| {
                CatalogGenError::ColumnNotFound(format!("column {name:?} not found in {path:?}"))
            })?;
            indices.push(idx);
        }
        columns.category = match columns.category.take() {
            Some(name) => match schema.index_of(&name) {
                Ok(idx) => {
                    indices.push(idx);
                    Some(name)
                }
                Err(_) => {
                    warn!(
                        "category column {name:?} not found in {path:?}, deriving categories from product names"
                    );
                    None
                }
            },
            None => None,
        };

        let projection = ProjectionMask::roots(metadata.parquet_schema(), indices);
        debug!(
            "product source {:?}: {} row group(s), {} row(s)",
            path,
            metadata.metadata().num_row_groups(),
            metadata.metadata().file_metadata().num_rows()
        );

        Ok(Self {
            file,
            metadata,
            projection,
            columns,
            batch_size,
            row_group: 0,
            reader: None,
        })
    }

    pub fn num_row_groups(&self) -> usize {
        self.metadata.metadata().num_row_groups()
    }

    pub fn has_category(&self) -> bool {
        self.columns.category.is_some()
    }

    fn open_row_group(&self, row_group: usize) -> Result<ParquetRecordBatchReader> {
        let reader = ParquetRecordBatchReaderBuilder::new_with_metadata(
            self.file.try_clone()?,
            self.metadata.clone(),
        )
        .with_row_groups(vec![row_group])
        .with_projection(self.projection.clone())
        .with_batch_size(self.batch_size)
        .build()?;

        Ok(reader)
    }

    fn next_batch(&mut self) -> Result<Option<RecordBatch>> {
        loop {
            if let Some(reader) = self.reader.as_mut() {
                match reader.next() {
                    Some(batch) => return Ok(Some(batch?)),
                    None => self.reader = None,
                }
            }

            if self.row_group >= self.num_row_groups() {
                return Ok(None);
            }
            debug!("reading row group {}", self.row_group);
            self.reader = Some(self.open_row_group(self.row_group)?);
            self.row_group += 1;
        }
    }

    fn column(&self, batch: &RecordBatch, name: &str, to: &DataType) -> Result<arrow::array::ArrayRef> {
        let col = batch
            .column_by_name(name)
            .ok_or_else(|| CatalogGenError::ColumnNotFound(name.to_string()))?;

        Ok(cast(col, to)?)
    }

    fn decode(&self, batch: &RecordBatch) -> Result<Vec<SourceProduct>> {
        let ids = self.column(batch, &self.columns.id, &DataType::Int64)?;
        let ids = ids.as_primitive::<Int64Type>();
        let names = self.column(batch, &self.columns.name, &DataType::Utf8)?;
        let names = names.as_string::<i32>();
        let categories = match &self.columns.category {
            Some(name) => Some(self.column(batch, name, &DataType::Utf8)?),
            None => None,
        };
        let categories = categories.as_ref().map(|arr| arr.as_string::<i32>());

        let mut products = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            if ids.is_null(row) {
                return Err(CatalogGenError::Internal(format!(
                    "null value in product id column {:?}",
                    self.columns.id
                )));
            }
            let name = if names.is_null(row) {
                ""
            } else {
                names.value(row)
            };
            let category = match categories {
                Some(arr) if arr.is_null(row) => GENERAL_CATEGORY,
                Some(arr) => arr.value(row),
                None => derive_category(name),
            };

            products.push(SourceProduct {
                id: ids.value(row),
                name: name.to_string(),
                category: coerce_category(category).to_string(),
            });
        }

        Ok(products)
    }
}

impl Iterator for ProductSource {
    type Item = Result<Vec<SourceProduct>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_batch() {
            Ok(Some(batch)) => Some(self.decode(&batch)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
