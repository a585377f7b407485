use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::Float64Builder;
use arrow::array::Int32Builder;
use arrow::array::Int64Builder;
use arrow::array::StringBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::store::products::Product;
use crate::store::reviews::Review;
use crate::store::schema::products_schema;
use crate::store::schema::reviews_schema;

// rough per-value size used to pre-allocate string buffers
const AVG_STR_LEN: usize = 32;

pub struct ProductBatchBuilder {
    id: Int64Builder,
    category: StringBuilder,
    name: StringBuilder,
    price: Float64Builder,
    inventory_count: Int32Builder,
    margin: Float64Builder,
    schema: SchemaRef,
    len: usize,
}

impl ProductBatchBuilder {
    pub fn new(cap: usize) -> Self {
        Self {
            id: Int64Builder::with_capacity(cap),
            category: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            name: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            price: Float64Builder::with_capacity(cap),
            inventory_count: Int32Builder::with_capacity(cap),
            margin: Float64Builder::with_capacity(cap),
            schema: products_schema(),
            len: 0,
        }
    }

    pub fn write_product(&mut self, product: &Product) {
        self.id.append_value(product.id);
        self.category.append_value(product.category.to_string());
        self.name.append_value(&product.name);
        self.price.append_value(product.price);
        self.inventory_count.append_value(product.inventory_count);
        self.margin.append_value(product.margin);

        self.len += 1;
    }

    pub fn build_record_batch(&mut self) -> Result<RecordBatch> {
        let cols: Vec<ArrayRef> = vec![
            Arc::new(self.id.finish()),
            Arc::new(self.category.finish()),
            Arc::new(self.name.finish()),
            Arc::new(self.price.finish()),
            Arc::new(self.inventory_count.finish()),
            Arc::new(self.margin.finish()),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), cols)?;

        self.len = 0;
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub struct ReviewBatchBuilder {
    review_id: Int64Builder,
    product_id: Int64Builder,
    product_name: StringBuilder,
    product_category: StringBuilder,
    rating: Int64Builder,
    review_text: StringBuilder,
    reviewer_name: StringBuilder,
    reviewer_persona: StringBuilder,
    reviewer_age: Int64Builder,
    reviewer_location: StringBuilder,
    review_date: StringBuilder,
    schema: SchemaRef,
    len: usize,
}

impl ReviewBatchBuilder {
    pub fn new(cap: usize) -> Self {
        Self {
            review_id: Int64Builder::with_capacity(cap),
            product_id: Int64Builder::with_capacity(cap),
            product_name: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            product_category: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            rating: Int64Builder::with_capacity(cap),
            review_text: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN * 8),
            reviewer_name: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            reviewer_persona: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            reviewer_age: Int64Builder::with_capacity(cap),
            reviewer_location: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            review_date: StringBuilder::with_capacity(cap, cap * AVG_STR_LEN),
            schema: reviews_schema(),
            len: 0,
        }
    }

    pub fn write_review(&mut self, review: &Review) {
        self.review_id.append_value(review.review_id);
        self.product_id.append_value(review.product_id);
        self.product_name.append_value(&review.product_name);
        self.product_category.append_value(&review.product_category);
        self.rating.append_value(review.rating);
        self.review_text.append_value(&review.review_text);
        self.reviewer_name.append_value(&review.reviewer_name);
        self.reviewer_persona.append_value(review.reviewer_persona);
        self.reviewer_age.append_value(review.reviewer_age);
        self.reviewer_location.append_value(review.reviewer_location);
        self.review_date.append_value(&review.review_date);

        self.len += 1;
    }

    pub fn build_record_batch(&mut self) -> Result<RecordBatch> {
        let cols: Vec<ArrayRef> = vec![
            Arc::new(self.review_id.finish()),
            Arc::new(self.product_id.finish()),
            Arc::new(self.product_name.finish()),
            Arc::new(self.product_category.finish()),
            Arc::new(self.rating.finish()),
            Arc::new(self.review_text.finish()),
            Arc::new(self.reviewer_name.finish()),
            Arc::new(self.reviewer_persona.finish()),
            Arc::new(self.reviewer_age.finish()),
            Arc::new(self.reviewer_location.finish()),
            Arc::new(self.review_date.finish()),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), cols)?;

        self.len = 0;
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
