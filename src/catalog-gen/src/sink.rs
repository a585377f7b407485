use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use tracing::debug;

use crate::error::CatalogGenError;
use crate::error::Result;
use crate::store::batch_builder::ReviewBatchBuilder;
use crate::store::reviews::Review;
use crate::store::schema::reviews_schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Parquet,
}

impl Format {
    /// Picks the format by file extension, case-insensitive.
    pub fn try_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(Format::Csv),
            Some("parquet") => Ok(Format::Parquet),
            _ => Err(CatalogGenError::UnsupportedOutput(
                path.display().to_string(),
            )),
        }
    }
}

pub fn writer_properties(max_row_group_size: Option<usize>) -> WriterProperties {
    let mut props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .set_dictionary_enabled(true);
    if let Some(size) = max_row_group_size {
        props = props.set_max_row_group_size(size);
    }

    props.build()
}

/// Writes the product table as a single parquet file.
pub fn write_products<P: AsRef<Path>>(
    path: P,
    batch: &RecordBatch,
    row_group_size: usize,
) -> Result<()> {
    if row_group_size == 0 {
        return Err(CatalogGenError::InvalidConfig(
            "row group size must be positive".to_string(),
        ));
    }

    let file = File::create(path.as_ref())?;
    let mut writer = ArrowWriter::try_new(
        file,
        batch.schema(),
        Some(writer_properties(Some(row_group_size))),
    )?;
    writer.write(batch)?;
    writer.close()?;

    Ok(())
}

/// Destination of generated reviews. `write` is called once per non-empty
/// batch, `close` exactly once at the end of the run.
pub trait ReviewSink {
    fn write(&mut self, reviews: &[Review]) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

pub fn open_review_sink<P: AsRef<Path>>(path: P) -> Result<Box<dyn ReviewSink>> {
    let path = path.as_ref().to_path_buf();
    let sink: Box<dyn ReviewSink> = match Format::try_from_path(&path)? {
        Format::Csv => Box::new(CsvSink::new(path)),
        Format::Parquet => Box::new(ParquetSink::new(path)),
    };

    Ok(sink)
}

/// Parquet sink. Every batch becomes its own row group.
pub struct ParquetSink {
    path: PathBuf,
    writer: Option<ArrowWriter<File>>,
}

impl ParquetSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path, writer: None }
    }

    fn open(&self) -> Result<ArrowWriter<File>> {
        debug!("opening parquet writer at {:?}", self.path);
        let file = File::create(&self.path)?;

        Ok(ArrowWriter::try_new(
            file,
            reviews_schema(),
            Some(writer_properties(None)),
        )?)
    }
}

impl ReviewSink for ParquetSink {
    fn write(&mut self, reviews: &[Review]) -> Result<()> {
        if reviews.is_empty() {
            return Ok(());
        }

        let mut builder = ReviewBatchBuilder::new(reviews.len());
        for review in reviews {
            builder.write_review(review);
        }
        let batch = builder.build_record_batch()?;

        if self.writer.is_none() {
            self.writer = Some(self.open()?);
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.write(&batch)?;
            writer.flush()?;
        }

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // nothing written, still leave a readable zero-row file behind
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => self.open()?,
        };
        writer.close()?;

        Ok(())
    }
}

/// CSV sink with a single header row.
pub struct CsvSink {
    path: PathBuf,
    writer: Option<csv::Writer<File>>,
}

impl CsvSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path, writer: None }
    }

    fn writer(&mut self) -> Result<&mut csv::Writer<File>> {
        if self.writer.is_none() {
            debug!("opening csv writer at {:?}", self.path);
            self.writer = Some(csv::Writer::from_path(&self.path)?);
        }

        self.writer
            .as_mut()
            .ok_or_else(|| CatalogGenError::Internal("csv writer is not open".to_string()))
    }
}

impl ReviewSink for CsvSink {
    fn write(&mut self, reviews: &[Review]) -> Result<()> {
        if reviews.is_empty() {
            return Ok(());
        }

        let writer = self.writer()?;
        // the header is emitted by the first serialized record
        for review in reviews {
            writer.serialize(review)?;
        }
        writer.flush()?;

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush()?,
            None => {
                let writer = self.writer()?;
                let schema = reviews_schema();
                writer.write_record(schema.fields().iter().map(|f| f.name()))?;
                writer.flush()?;
                self.writer = None;
            }
        }

        Ok(())
    }
}
