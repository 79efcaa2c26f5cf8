use serde::{Deserialize, Serialize};

/// Whether a column's values are numeric or free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Number,
    String,
}

/// Aggregation semantics the reporting host attaches to a column: metrics are
/// reaggregatable, dimensions are categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semantics {
    Metric,
    Dimension,
}

/// A single column descriptor, as inferred from an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Synthetic positional identity (`"c0"`, `"c1"`, ...). Stable only while
    /// the source column order is unchanged.
    pub name: String,
    /// Original header text; the join key projection uses to find the source
    /// column.
    pub label: String,
    pub data_type: DataType,
    pub semantics: Semantics,
}
