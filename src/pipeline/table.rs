use serde::Serialize;
use std::fmt;

/// Inferred kind of a column, driving the imputation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    /// Infers the kind of a column from its cells.
    ///
    /// A column is numeric when every non-missing cell parses as a float.
    /// A column with no non-missing cells at all is numeric too: with
    /// nothing observed there is no mode to fall back on, and the mean
    /// branch is the one that knows how to leave such cells alone.
    pub fn infer(cells: &[Option<String>]) -> Self {
        for value in cells.iter().flatten() {
            if value.trim().parse::<f64>().is_err() {
                return ColumnKind::Categorical;
            }
        }
        ColumnKind::Numeric
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// A named column of cells. `None` marks a missing value.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Option<String>>,
}

impl Column {
    pub fn kind(&self) -> ColumnKind {
        ColumnKind::infer(&self.cells)
    }

    /// Number of missing cells in this column.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

/// Row and column counts of a table at a point in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// An in-memory table of named columns aligned by row index.
///
/// Invariant: every column holds the same number of cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |col| col.cells.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.row_count(),
            cols: self.column_count(),
        }
    }

    /// Cells of one row, in column order.
    pub fn row(&self, index: usize) -> Vec<Option<&str>> {
        self.columns
            .iter()
            .map(|col| col.cells[index].as_deref())
            .collect()
    }

    /// Keeps only the rows whose flag is set, preserving relative order.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.row_count());
        for col in &mut self.columns {
            let mut flags = keep.iter();
            col.cells.retain(|_| *flags.next().unwrap());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    None
                } else {
                    Some(v.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn infers_numeric_from_floats_and_ints() {
        assert_eq!(ColumnKind::infer(&cells(&["1", "2.5", "", "-3e2"])), ColumnKind::Numeric);
    }

    #[test]
    fn infers_categorical_when_any_value_is_text() {
        assert_eq!(ColumnKind::infer(&cells(&["1", "two", "3"])), ColumnKind::Categorical);
    }

    #[test]
    fn all_missing_column_is_numeric() {
        assert_eq!(ColumnKind::infer(&cells(&["", "", ""])), ColumnKind::Numeric);
    }

    #[test]
    fn whitespace_only_cell_is_a_categorical_value() {
        assert_eq!(ColumnKind::infer(&cells(&[" ", "1"])), ColumnKind::Categorical);
    }

    #[test]
    fn retain_rows_keeps_columns_aligned() {
        let mut table = Table {
            columns: vec![
                Column { name: "a".into(), cells: cells(&["1", "2", "3"]) },
                Column { name: "b".into(), cells: cells(&["x", "y", "z"]) },
            ],
        };
        table.retain_rows(&[true, false, true]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(1), vec![Some("3"), Some("z")]);
    }
}
