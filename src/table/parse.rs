use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::debug;

use super::Table;
use crate::error::ConnectorError;

/// Replace literal line breaks inside quoted fields with a single space so the
/// export can be split structurally afterwards. `\r\n`, `\n` and bare `\r`
/// each collapse to one space; quote state toggles on every `"`, which keeps
/// the doubled-quote escape (`""`) balanced.
fn normalize_quoted_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                out.push(c);
            }
            '\r' | '\n' if in_quotes => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Parse CSV export text into a [`Table`]: first record is the header, the
/// rest are data rows. An export without even a header row is a parse error;
/// an export with zero data rows parses fine (schema inference rejects it
/// later if a schema is actually needed).
pub fn parse_table(text: &str) -> Result<Table, ConnectorError> {
    let normalized = normalize_quoted_line_breaks(text);

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(normalized.as_bytes()));

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| ConnectorError::Parse(e.to_string()))?;
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    let mut iter = records.into_iter();
    let headers = iter
        .next()
        .ok_or_else(|| ConnectorError::Parse("export is empty".into()))?;
    let rows: Vec<Vec<String>> = iter.collect();

    debug!(columns = headers.len(), rows = rows.len(), "parsed export");
    Ok(Table { headers, rows })
}
