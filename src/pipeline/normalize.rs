use crate::pipeline::table::Table;
use std::collections::HashSet;

/// Normalizes a single column name: trim, lowercase, strip internal spaces.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "")
}

/// Normalizes every column name in place.
///
/// When two normalized names collide, the later column wins and the
/// earlier one is removed (keep-last). The survivor stays at its own
/// position, so relative order of the remaining columns is unchanged.
pub fn normalize_headers(table: &mut Table) {
    for col in &mut table.columns {
        col.name = normalize_name(&col.name);
    }

    let mut seen_from_end = HashSet::new();
    let mut keep: Vec<bool> = table
        .columns
        .iter()
        .rev()
        .map(|col| seen_from_end.insert(col.name.clone()))
        .collect();
    keep.reverse();

    let mut flags = keep.iter();
    table.columns.retain(|_| *flags.next().unwrap());
}

/// Removes every column whose normalized name is in `drop_columns`.
/// Names not present in the table are ignored.
pub fn drop_columns(table: &mut Table, drop_columns: &HashSet<String>) -> usize {
    let before = table.columns.len();
    table.columns.retain(|col| !drop_columns.contains(&col.name));
    before - table.columns.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::table::Column;

    fn table_with(names: &[&str]) -> Table {
        Table {
            columns: names
                .iter()
                .map(|name| Column { name: name.to_string(), cells: vec![Some("x".into())] })
                .collect(),
        }
    }

    #[test]
    fn trims_lowercases_and_strips_spaces() {
        assert_eq!(normalize_name(" First Name "), "firstname");
        assert_eq!(normalize_name("AGE"), "age");
        assert_eq!(normalize_name("Unnamed: 0"), "unnamed:0");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_name(" Zip Code ");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn colliding_names_keep_the_later_column() {
        let mut table = table_with(&[" Name ", "age", "name"]);
        table.columns[0].cells = vec![Some("first".into())];
        table.columns[2].cells = vec![Some("last".into())];
        normalize_headers(&mut table);

        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["age", "name"]);
        assert_eq!(table.columns[1].cells[0].as_deref(), Some("last"));
    }

    #[test]
    fn drop_ignores_absent_names() {
        let mut table = table_with(&["name", "age"]);
        let drops: HashSet<String> = ["unnamed:0".to_string()].into_iter().collect();
        assert_eq!(drop_columns(&mut table, &drops), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn drop_matches_normalized_names_exactly() {
        let mut table = table_with(&["unnamed:0", "name"]);
        let drops: HashSet<String> = ["unnamed:0".to_string()].into_iter().collect();
        assert_eq!(drop_columns(&mut table, &drops), 1);
        assert_eq!(table.columns[0].name, "name");
    }
}
