use crate::pipeline::table::{ColumnKind, Shape, Table};
use serde::Serialize;
use std::fmt;

/// Per-column summary in the cleaning report.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub missing: usize,
    pub kind: ColumnKind,
}

/// Immutable summary of one cleaning run, derived from the table as it
/// looked right after parsing and as it looks at the end.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    pub original_shape: Shape,
    pub cleaned_shape: Shape,
    pub columns: Vec<ColumnSummary>,
}

impl CleaningReport {
    pub fn from_table(original_shape: Shape, table: &Table) -> Self {
        let columns = table
            .columns
            .iter()
            .map(|col| ColumnSummary {
                name: col.name.clone(),
                missing: col.missing_count(),
                kind: col.kind(),
            })
            .collect();
        CleaningReport {
            original_shape,
            cleaned_shape: table.shape(),
            columns,
        }
    }
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Cleaning Summary")?;
        writeln!(f)?;
        writeln!(f, "Original Shape: {}", self.original_shape)?;
        writeln!(f, "Cleaned Shape: {}", self.cleaned_shape)?;
        writeln!(f)?;

        writeln!(f, "Missing values (after cleaning):")?;
        for col in &self.columns {
            writeln!(f, "  {}: {}", col.name, col.missing)?;
        }
        writeln!(f)?;

        writeln!(f, "Column types:")?;
        for col in &self.columns {
            writeln!(f, "  {}: {}", col.name, col.kind)?;
        }
        Ok(())
    }
}
