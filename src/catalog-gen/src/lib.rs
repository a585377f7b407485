pub mod error;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod store;
