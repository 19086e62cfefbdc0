use crate::pipeline::table::Table;
use std::collections::HashSet;

/// Removes rows that are exact duplicates of an earlier row across all
/// columns, keeping the first occurrence. Missing cells compare equal to
/// each other. Returns the number of rows removed.
pub fn drop_duplicate_rows(table: &mut Table) -> usize {
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::new();
    let keep: Vec<bool> = (0..table.row_count())
        .map(|index| {
            let key: Vec<Option<String>> = table
                .row(index)
                .into_iter()
                .map(|cell| cell.map(str::to_string))
                .collect();
            seen.insert(key)
        })
        .collect();

    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        table.retain_rows(&keep);
    }
    removed
}

/// Removes rows whose every cell is missing. Returns the number removed.
pub fn drop_empty_rows(table: &mut Table) -> usize {
    let keep: Vec<bool> = (0..table.row_count())
        .map(|index| table.row(index).iter().any(|cell| cell.is_some()))
        .collect();

    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        table.retain_rows(&keep);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::table::Column;

    fn column(name: &str, values: &[&str]) -> Column {
        Column {
            name: name.to_string(),
            cells: values
                .iter()
                .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
                .collect(),
        }
    }

    #[test]
    fn keeps_first_occurrence_and_order() {
        let mut table = Table {
            columns: vec![
                column("a", &["1", "2", "1", "3"]),
                column("b", &["x", "y", "x", "z"]),
            ],
        };
        assert_eq!(drop_duplicate_rows(&mut table), 1);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.row(0), vec![Some("1"), Some("x")]);
        assert_eq!(table.row(2), vec![Some("3"), Some("z")]);
    }

    #[test]
    fn missing_cells_compare_equal() {
        let mut table = Table {
            columns: vec![column("a", &["1", "1"]), column("b", &["", ""])],
        };
        assert_eq!(drop_duplicate_rows(&mut table), 1);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn case_differences_are_not_duplicates() {
        let mut table = Table {
            columns: vec![column("name", &["Alice", "alice"])],
        };
        assert_eq!(drop_duplicate_rows(&mut table), 0);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn drops_only_fully_missing_rows() {
        let mut table = Table {
            columns: vec![column("a", &["", "1", ""]), column("b", &["", "", "y"])],
        };
        assert_eq!(drop_empty_rows(&mut table), 1);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0), vec![Some("1"), None]);
    }
}
