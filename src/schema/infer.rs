use tracing::debug;

use super::types::{ColumnSchema, DataType, Semantics};
use crate::error::ConnectorError;
use crate::table::Table;

/// Derive one [`ColumnSchema`] per header column, in header order, sampling
/// only the first data row.
///
/// A sample cell that parses fully as a number marks the column as a
/// reaggregatable metric; anything else, including the empty string, marks a
/// dimension. Sampling a single row is a deliberate compatibility policy:
/// a column whose first row happens to look numeric is classified `Number`
/// regardless of later rows.
///
/// The synthetic `name` is positional and is the stable join key between the
/// schema and requested-field lists.
pub fn infer_schema(table: &Table) -> Result<Vec<ColumnSchema>, ConnectorError> {
    let sample_row = table
        .rows
        .first()
        .ok_or_else(|| ConnectorError::Parse("export has no data rows to sample".into()))?;

    let mut cols = Vec::with_capacity(table.headers.len());
    for (idx, label) in table.headers.iter().enumerate() {
        let sample = sample_row.get(idx).map(String::as_str).unwrap_or("");
        let (data_type, semantics) = if is_numeric(sample) {
            (DataType::Number, Semantics::Metric)
        } else {
            (DataType::String, Semantics::Dimension)
        };
        cols.push(ColumnSchema {
            name: format!("c{idx}"),
            label: label.clone(),
            data_type,
            semantics,
        });
    }

    debug!(columns = cols.len(), "inferred schema");
    Ok(cols)
}

fn is_numeric(v: &str) -> bool {
    v.parse::<i64>().is_ok() || v.parse::<f64>().is_ok()
}
