use std::collections::HashMap;

use super::Table;
use crate::error::ConnectorError;
use crate::schema::ColumnSchema;

/// Extract and reorder the requested columns from `table`'s data rows.
///
/// Resolution is by header label, the join key from a requested field list
/// back into the raw export. The label index is built once per call; when the
/// source header repeats a label, the first occurrence wins, and duplicate
/// requested labels each resolve independently to that same source column.
///
/// A requested label with no matching header cell is a schema mismatch: the
/// cached schema no longer describes the export, and there is no meaningful
/// cell to return.
pub fn project(
    table: &Table,
    requested: &[ColumnSchema],
) -> Result<Vec<Vec<String>>, ConnectorError> {
    let mut by_label: HashMap<&str, usize> = HashMap::with_capacity(table.headers.len());
    for (idx, label) in table.headers.iter().enumerate() {
        by_label.entry(label.as_str()).or_insert(idx);
    }

    let mut indices = Vec::with_capacity(requested.len());
    for col in requested {
        match by_label.get(col.label.as_str()) {
            Some(&idx) => indices.push(idx),
            None => return Err(ConnectorError::SchemaMismatch(col.label.clone())),
        }
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{infer_schema, DataType, Semantics};

    fn sample_table() -> Table {
        Table {
            headers: vec!["Name".into(), "Amount".into(), "Region".into()],
            rows: vec![
                vec!["Widget".into(), "42".into(), "EU".into()],
                vec!["Gadget".into(), "7".into(), "US".into()],
            ],
        }
    }

    fn col(name: &str, label: &str) -> ColumnSchema {
        ColumnSchema {
            name: name.into(),
            label: label.into(),
            data_type: DataType::String,
            semantics: Semantics::Dimension,
        }
    }

    #[test]
    fn full_schema_projection_is_identity() {
        let table = sample_table();
        let schema = infer_schema(&table).unwrap();
        let rows = project(&table, &schema).unwrap();
        assert_eq!(rows, table.rows);
    }

    #[test]
    fn subset_projection_keeps_only_requested_column() {
        let table = sample_table();
        let rows = project(&table, &[col("c2", "Region")]).unwrap();
        assert_eq!(rows, vec![vec!["EU".to_string()], vec!["US".to_string()]]);
    }

    #[test]
    fn requested_order_is_preserved() {
        let table = sample_table();
        let rows = project(&table, &[col("c1", "Amount"), col("c0", "Name")]).unwrap();
        assert_eq!(rows[0], vec!["42".to_string(), "Widget".to_string()]);
    }

    #[test]
    fn duplicate_requested_labels_duplicate_the_column() {
        let table = sample_table();
        let rows = project(&table, &[col("c1", "Amount"), col("c1", "Amount")]).unwrap();
        assert_eq!(rows[1], vec!["7".to_string(), "7".to_string()]);
    }

    #[test]
    fn duplicate_source_labels_resolve_to_first_occurrence() {
        let table = Table {
            headers: vec!["X".into(), "X".into()],
            rows: vec![vec!["first".into(), "second".into()]],
        };
        let rows = project(&table, &[col("c0", "X")]).unwrap();
        assert_eq!(rows, vec![vec!["first".to_string()]]);
    }

    #[test]
    fn unknown_label_is_a_schema_mismatch() {
        let table = sample_table();
        let err = project(&table, &[col("c9", "Nope")]).unwrap_err();
        assert!(matches!(err, ConnectorError::SchemaMismatch(label) if label == "Nope"));
    }

    #[test]
    fn output_row_count_matches_data_row_count() {
        let table = sample_table();
        let rows = project(&table, &[col("c0", "Name")]).unwrap();
        assert_eq!(rows.len(), table.rows.len());
    }
}
