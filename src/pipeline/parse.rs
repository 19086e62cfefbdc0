use crate::error::{CleanerError, Result};
use crate::pipeline::table::{Column, Table};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Decodes raw bytes as comma-separated text with a header row.
///
/// Empty fields parse as missing cells. Rows whose field count differs
/// from the header fail the whole parse; there is no partial table.
pub fn parse_table(raw: &[u8]) -> Result<Table> {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let text = std::str::from_utf8(raw)
        .map_err(|e| CleanerError::Format(format!("input is not valid UTF-8: {e}")))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CleanerError::Format(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(CleanerError::Format("no columns to parse from input".into()));
    }

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column { name, cells: Vec::new() })
        .collect();

    for record in reader.records() {
        let record = record.map_err(|e| CleanerError::Format(e.to_string()))?;
        for (col, field) in columns.iter_mut().zip(record.iter()) {
            col.cells.push(if field.is_empty() {
                None
            } else {
                Some(field.to_string())
            });
        }
    }

    Ok(Table { columns })
}
