pub mod parse;
pub mod project;

pub use parse::parse_table;
pub use project::project;

/// A fetched export, split into header and data rows.
///
/// Constructed fresh per fetch and discarded after projection; never mutated
/// in place. Uniform row width is a contract with the producer, not validated
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column display labels, from the first row of the export.
    pub headers: Vec<String>,
    /// Each data row, one `String` per cell.
    pub rows: Vec<Vec<String>>,
}
