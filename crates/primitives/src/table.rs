//! Tabular data abstraction.

use serde::{Deserialize, Serialize};

use crate::{RowMap, Value};

/// A column-labeled table: an ordered column list plus an ordered row list.
///
/// Each row is a mapping from column name to cell value. The table is the
/// caller-facing currency of the vectorizer; row-mappings are the interchange
/// format with the underlying dictionary vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Ordered column names.
    columns: Vec<String>,
    /// Ordered rows.
    rows: Vec<RowMap>,
}

impl Table {
    /// Create a new table from column names and rows.
    ///
    /// Rows are expected to only carry keys listed in `columns`.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<RowMap>) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.keys().all(|key| columns.iter().any(|c| c == key)))
        );
        Self { columns, rows }
    }

    /// Reassemble a table from row-mappings on a fixed column set.
    ///
    /// Keys outside `columns` are dropped; any cell absent from a row is
    /// filled with numeric zero, so the resulting table has no missing cells.
    #[must_use]
    pub fn from_records(columns: Vec<String>, records: Vec<RowMap>) -> Self {
        let rows = records
            .into_iter()
            .map(|mut row| {
                row.retain(|key, _| columns.iter().any(|c| c == key));
                for name in &columns {
                    if !row.contains_key(name) {
                        row.insert(name.clone(), Value::Num(0.0));
                    }
                }
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Ordered column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Ordered rows.
    #[must_use]
    pub fn rows(&self) -> &[RowMap] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub const fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub const fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the cell at `row` / `column`.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Convert the rows into row-mappings for the dictionary vectorizer.
    #[must_use]
    pub fn to_records(&self) -> Vec<RowMap> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, Value)]) -> RowMap {
        cells.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn table_dimensions() {
        let t = Table::new(
            vec!["school".to_string(), "gpa".to_string()],
            vec![
                row(&[("school", "a".into()), ("gpa", Value::Num(2.0))]),
                row(&[("school", "b".into()), ("gpa", Value::Num(3.0))]),
            ],
        );

        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.n_columns(), 2);
        assert!(!t.is_empty());
        assert_eq!(t.columns(), &["school".to_string(), "gpa".to_string()]);
    }

    #[test]
    fn table_get() {
        let t = Table::new(
            vec!["school".to_string(), "gpa".to_string()],
            vec![row(&[("school", "a".into()), ("gpa", Value::Num(2.0))])],
        );

        assert_eq!(t.get(0, "school"), Some(&Value::from("a")));
        assert_eq!(t.get(0, "gpa"), Some(&Value::Num(2.0)));
        assert_eq!(t.get(0, "missing"), None);
        assert_eq!(t.get(1, "school"), None);
    }

    #[test]
    fn from_records_fills_missing_cells_with_zero() {
        let t = Table::from_records(
            vec!["school".to_string(), "gpa".to_string()],
            vec![row(&[("gpa", Value::Num(2.0))])],
        );

        assert_eq!(t.get(0, "school"), Some(&Value::Num(0.0)));
        assert_eq!(t.get(0, "gpa"), Some(&Value::Num(2.0)));
    }

    #[test]
    fn from_records_drops_unknown_keys() {
        let t = Table::from_records(
            vec!["gpa".to_string()],
            vec![row(&[("gpa", Value::Num(2.0)), ("extra", Value::Num(9.0))])],
        );

        assert_eq!(t.get(0, "extra"), None);
        assert_eq!(t.rows()[0].len(), 1);
    }

    #[test]
    fn to_records_round_trip() {
        let rows = vec![row(&[("school", "a".into()), ("gpa", Value::Num(2.0))])];
        let t = Table::new(vec!["school".to_string(), "gpa".to_string()], rows.clone());

        assert_eq!(t.to_records(), rows);
    }
}
