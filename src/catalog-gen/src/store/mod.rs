pub mod batch_builder;
pub mod categories;
pub mod personas;
pub mod products;
pub mod ratings;
pub mod reviews;
pub mod schema;
mod titles;
