use std::env::temp_dir;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::Int32Array;
use arrow::array::StringArray;
use arrow::record_batch::RecordBatch;
use catalog_gen::error::CatalogGenError;
use catalog_gen::error::Result;
use catalog_gen::pipeline::generate_products;
use catalog_gen::pipeline::generate_reviews;
use catalog_gen::pipeline::ProductsConfig;
use catalog_gen::pipeline::ReviewsConfig;
use catalog_gen::source::SourceColumns;
use catalog_gen::store::ratings::category_bias;
use catalog_gen::store::schema::reviews_schema;
use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use uuid::Uuid;

fn tmp_path(ext: &str) -> PathBuf {
    let mut path = temp_dir();
    path.push(format!("{}.{ext}", Uuid::new_v4()));
    path
}

fn to() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn products_file(rows: usize) -> PathBuf {
    let path = tmp_path("parquet");
    generate_products(&ProductsConfig {
        rows,
        output: path.clone(),
        seed: 42,
        row_group_size: 128,
    })
    .unwrap();
    path
}

fn write_input(path: &PathBuf, cols: Vec<(&str, ArrayRef)>) {
    let batch = RecordBatch::try_from_iter(cols).unwrap();
    let mut writer = ArrowWriter::try_new(File::create(path).unwrap(), batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

fn config(input: PathBuf, output: PathBuf) -> ReviewsConfig {
    ReviewsConfig {
        input,
        output,
        columns: SourceColumns {
            id: "id".to_string(),
            name: "product_name".to_string(),
            category: Some("product_category".to_string()),
        },
        max_reviews_per_product: 5,
        batch_size: 100_000,
        seed: 42,
        years_back: 3,
        to: to(),
    }
}

fn read_csv(path: &PathBuf) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

#[test]
fn test_reviews_csv_independent_of_batch_size() -> Result<()> {
    let input = products_file(500);
    let a = tmp_path("csv");
    let b = tmp_path("CSV");

    let mut cfg = config(input.clone(), a.clone());
    cfg.batch_size = 7;
    let stats_a = generate_reviews(&cfg)?;
    let mut cfg = config(input.clone(), b.clone());
    cfg.batch_size = 100_000;
    let stats_b = generate_reviews(&cfg)?;

    assert_eq!(stats_a.products, 500);
    assert_eq!(stats_a.reviews, stats_b.reviews);
    assert!(stats_a.batches > stats_b.batches);
    assert_eq!(fs::read(&a)?, fs::read(&b)?);

    let records = read_csv(&a);
    assert_eq!(records.len() as i64, stats_a.reviews);
    let mut last_product = 0;
    for (idx, rec) in records.iter().enumerate() {
        assert_eq!(rec.len(), 11);
        assert_eq!(rec[0].parse::<i64>().unwrap(), idx as i64 + 1);
        let product_id = rec[1].parse::<i64>().unwrap();
        assert!(product_id >= last_product && product_id <= 500);
        last_product = product_id;
        assert!(category_bias(&rec[3]).is_some(), "{}", &rec[3]);
        let rating = rec[4].parse::<i64>().unwrap();
        assert!((1..=5).contains(&rating));
        assert!(rec[5].contains(&rec[2]));
        assert!(rec[5].ends_with(&format!("- {}, {}, {}", &rec[6], &rec[7], &rec[9])));
    }

    for path in [input, a, b] {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[test]
fn test_reviews_parquet() -> Result<()> {
    let input = products_file(300);
    let output = tmp_path("parquet");
    let mut cfg = config(input.clone(), output.clone());
    cfg.batch_size = 64;
    let stats = generate_reviews(&cfg)?;

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&output)?)?.build()?;
    let mut next_id = 1;
    for batch in reader {
        let batch = batch?;
        assert_eq!(batch.schema().fields(), reviews_schema().fields());
        let ids = batch
            .column(0)
            .as_any()
            .downcast_ref::<arrow::array::Int64Array>()
            .unwrap();
        for id in ids.values().iter() {
            assert_eq!(*id, next_id);
            next_id += 1;
        }
    }
    assert_eq!(next_id - 1, stats.reviews);

    fs::remove_file(input)?;
    fs::remove_file(output)?;
    Ok(())
}

#[test]
fn test_zero_reviews_per_product() -> Result<()> {
    let input = products_file(50);

    let csv_out = tmp_path("csv");
    let mut cfg = config(input.clone(), csv_out.clone());
    cfg.max_reviews_per_product = 0;
    let stats = generate_reviews(&cfg)?;
    assert_eq!(stats.reviews, 0);
    assert_eq!(stats.products, 50);
    let header = reviews_schema()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(fs::read_to_string(&csv_out)?, format!("{header}\n"));

    let pq_out = tmp_path("parquet");
    let mut cfg = config(input.clone(), pq_out.clone());
    cfg.max_reviews_per_product = 0;
    generate_reviews(&cfg)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(File::open(&pq_out)?)?;
    assert_eq!(builder.metadata().file_metadata().num_rows(), 0);
    assert_eq!(builder.schema().fields().len(), 11);

    for path in [input, csv_out, pq_out] {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[test]
fn test_unknown_categories_become_general() -> Result<()> {
    let input = tmp_path("parquet");
    write_input(&input, vec![
        ("id", Arc::new(Int32Array::from(vec![1, 2, 3, 4])) as ArrayRef),
        (
            "product_name",
            Arc::new(StringArray::from(vec!["A", "B", "C", "D"])) as ArrayRef,
        ),
        (
            "product_category",
            Arc::new(StringArray::from(vec![
                Some("Gizmos"),
                Some("Home & Kitchen"),
                Some("Books"),
                None,
            ])) as ArrayRef,
        ),
    ]);
    let output = tmp_path("csv");
    let mut cfg = config(input.clone(), output.clone());
    cfg.seed = 3;
    generate_reviews(&cfg)?;

    for rec in read_csv(&output) {
        let expected = if &rec[1] == "3" { "Books" } else { "General" };
        assert_eq!(&rec[3], expected);
    }

    fs::remove_file(input)?;
    fs::remove_file(output)?;
    Ok(())
}

#[test]
fn test_missing_category_column_uses_names() -> Result<()> {
    let input = tmp_path("parquet");
    write_input(&input, vec![
        ("id", Arc::new(Int32Array::from(vec![1, 2, 3])) as ArrayRef),
        (
            "product_name",
            Arc::new(StringArray::from(vec![
                "Books_Paperback Novel",
                "Gizmo_Widget",
                "Plain Name",
            ])) as ArrayRef,
        ),
    ]);

    for category in [Some("product_category".to_string()), None] {
        let output = tmp_path("csv");
        let mut cfg = config(input.clone(), output.clone());
        cfg.columns.category = category;
        cfg.seed = 11;
        generate_reviews(&cfg)?;

        for rec in read_csv(&output) {
            let expected = if &rec[1] == "1" { "Books" } else { "General" };
            assert_eq!(&rec[3], expected);
        }
        fs::remove_file(output)?;
    }

    fs::remove_file(input)?;
    Ok(())
}

#[test]
fn test_null_id_is_an_error() {
    let input = tmp_path("parquet");
    write_input(&input, vec![
        ("id", Arc::new(Int32Array::from(vec![Some(1), None])) as ArrayRef),
        (
            "product_name",
            Arc::new(StringArray::from(vec!["A", "B"])) as ArrayRef,
        ),
    ]);
    let output = tmp_path("csv");
    assert!(generate_reviews(&config(input.clone(), output.clone())).is_err());

    fs::remove_file(input).unwrap();
    let _ = fs::remove_file(output);
}

#[test]
fn test_bad_inputs() {
    let input = products_file(10);

    let output = tmp_path("json");
    let res = generate_reviews(&config(input.clone(), output.clone()));
    assert!(matches!(res, Err(CatalogGenError::UnsupportedOutput(_))));
    assert!(!output.exists());

    let output = tmp_path("csv");
    let mut cfg = config(input.clone(), output.clone());
    cfg.columns.id = "product_id".to_string();
    let res = generate_reviews(&cfg);
    assert!(matches!(res, Err(CatalogGenError::ColumnNotFound(_))));
    assert!(!output.exists());

    let res = generate_reviews(&config(tmp_path("parquet"), output.clone()));
    assert!(matches!(res, Err(CatalogGenError::FileNotFound(_))));

    let mut cfg = config(input.clone(), output.clone());
    cfg.batch_size = 0;
    assert!(matches!(
        generate_reviews(&cfg),
        Err(CatalogGenError::InvalidConfig(_))
    ));

    fs::remove_file(input).unwrap();
}
