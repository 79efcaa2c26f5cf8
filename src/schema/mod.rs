pub mod cache;
pub mod infer;
pub mod types;

pub use infer::infer_schema;
pub use types::{ColumnSchema, DataType, Semantics};
