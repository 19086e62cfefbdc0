use crate::error::{CleanerError, Result};
use crate::pipeline::table::Table;

/// Writes the table back out as comma-separated UTF-8 text: one header
/// row of column names, then the data rows. Missing cells become empty
/// fields.
pub fn write_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(table.columns.iter().map(|col| col.name.as_str()))?;
    for index in 0..table.row_count() {
        writer.write_record(table.row(index).into_iter().map(|cell| cell.unwrap_or("")))?;
    }

    writer
        .into_inner()
        .map_err(|e| CleanerError::Format(format!("failed to flush cleaned output: {e}")))
}
