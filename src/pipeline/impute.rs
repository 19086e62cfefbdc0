use crate::constants::CATEGORICAL_FILL;
use crate::pipeline::table::{Column, ColumnKind, Table};
use std::collections::HashMap;

/// Fills missing cells column by column: categorical columns take the
/// mode, numeric columns take the mean. A numeric column with nothing to
/// average keeps its missing cells.
pub fn impute_missing(table: &mut Table) {
    for col in &mut table.columns {
        match col.kind() {
            ColumnKind::Categorical => fill_categorical(col),
            ColumnKind::Numeric => fill_numeric(col),
        }
    }
}

/// Fills missing cells with the most frequent value. Ties break toward
/// the lexicographically smallest tied value. Falls back to the
/// "Unknown" placeholder when the column has no values at all.
pub fn fill_categorical(col: &mut Column) {
    let fill = mode(&col.cells).unwrap_or_else(|| CATEGORICAL_FILL.to_string());
    for cell in &mut col.cells {
        if cell.is_none() {
            *cell = Some(fill.clone());
        }
    }
}

/// Fills missing cells with the arithmetic mean of the column. With no
/// non-missing values the mean is undefined and the cells stay missing.
pub fn fill_numeric(col: &mut Column) {
    let values: Vec<f64> = col
        .cells
        .iter()
        .flatten()
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();
    if values.is_empty() {
        return;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let fill = format_value(mean);
    for cell in &mut col.cells {
        if cell.is_none() {
            *cell = Some(fill.clone());
        }
    }
}

fn mode(cells: &[Option<String>]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in cells.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        best = match best {
            Some((_, best_count)) if count < best_count => best,
            Some((best_value, best_count)) if count == best_count && value >= best_value => best,
            _ => Some((value, count)),
        };
    }
    best.map(|(value, _)| value.to_string())
}

/// Renders an imputed number: integral means print without a fractional
/// part so a mean of 15.0 lands in the cell as "15".
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
