use std::sync::Arc;

use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use arrow::datatypes::SchemaRef;

pub const COLUMN_ID: &str = "id";
pub const COLUMN_PRODUCT_CATEGORY: &str = "product_category";
pub const COLUMN_PRODUCT_NAME: &str = "product_name";
pub const COLUMN_PRICE_USD: &str = "price_usd";
pub const COLUMN_INVENTORY_COUNT: &str = "inventory_count";
pub const COLUMN_MARGIN: &str = "margin";

pub const COLUMN_REVIEW_ID: &str = "review_id";
pub const COLUMN_PRODUCT_ID: &str = "product_id";
pub const COLUMN_RATING: &str = "rating";
pub const COLUMN_REVIEW_TEXT: &str = "review_text";
pub const COLUMN_REVIEWER_NAME: &str = "reviewer_name";
pub const COLUMN_REVIEWER_PERSONA: &str = "reviewer_persona";
pub const COLUMN_REVIEWER_AGE: &str = "reviewer_age";
pub const COLUMN_REVIEWER_LOCATION: &str = "reviewer_location";
pub const COLUMN_REVIEW_DATE: &str = "review_date";

pub fn products_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COLUMN_ID, DataType::Int64, false),
        Field::new(COLUMN_PRODUCT_CATEGORY, DataType::Utf8, false),
        Field::new(COLUMN_PRODUCT_NAME, DataType::Utf8, false),
        Field::new(COLUMN_PRICE_USD, DataType::Float64, false),
        Field::new(COLUMN_INVENTORY_COUNT, DataType::Int32, false),
        Field::new(COLUMN_MARGIN, DataType::Float64, false),
    ]))
}

pub fn reviews_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COLUMN_REVIEW_ID, DataType::Int64, false),
        Field::new(COLUMN_PRODUCT_ID, DataType::Int64, false),
        Field::new(COLUMN_PRODUCT_NAME, DataType::Utf8, false),
        Field::new(COLUMN_PRODUCT_CATEGORY, DataType::Utf8, false),
        Field::new(COLUMN_RATING, DataType::Int64, false),
        Field::new(COLUMN_REVIEW_TEXT, DataType::Utf8, false),
        Field::new(COLUMN_REVIEWER_NAME, DataType::Utf8, false),
        Field::new(COLUMN_REVIEWER_PERSONA, DataType::Utf8, false),
        Field::new(COLUMN_REVIEWER_AGE, DataType::Int64, false),
        Field::new(COLUMN_REVIEWER_LOCATION, DataType::Utf8, false),
        Field::new(COLUMN_REVIEW_DATE, DataType::Utf8, false),
    ]))
}
