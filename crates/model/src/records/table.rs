use crate::records::row::Row;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Row {index} has {found} values but the table has {expected} columns")]
    WidthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row position {position} is out of bounds for a table of {len} rows")]
    OutOfBounds { position: usize, len: usize },
}

/// Fully materialized delimited file: a header plus rows of the same width.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, TableError> {
        if let Some(row) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(TableError::WidthMismatch {
                index: row.index,
                expected: columns.len(),
                found: row.len(),
            });
        }
        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ordinal(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Value of `column` in the row at `position` (not the row's source index).
    pub fn value(&self, position: usize, column: &str) -> Option<&str> {
        let ordinal = self.ordinal(column)?;
        self.rows.get(position)?.get(ordinal)
    }

    pub fn column_values(&self, ordinal: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(move |r| r.get(ordinal))
    }

    /// Builds a new table holding the rows at `positions`, in that order.
    pub fn take(&self, positions: impl IntoIterator<Item = usize>) -> Result<Table, TableError> {
        let rows = positions
            .into_iter()
            .map(|position| {
                self.rows
                    .get(position)
                    .cloned()
                    .ok_or(TableError::OutOfBounds {
                        position,
                        len: self.rows.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["id".into(), "name".into()],
            vec![
                Row::new(0, vec!["1".into(), "ann".into()]),
                Row::new(1, vec!["2".into(), "bob".into()]),
                Row::new(2, vec!["3".into(), "cid".into()]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_width_mismatch() {
        let err = Table::new(
            vec!["a".into(), "b".into()],
            vec![Row::new(4, vec!["only".into()])],
        )
        .unwrap_err();

        assert_eq!(
            err,
            TableError::WidthMismatch {
                index: 4,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_take_keeps_order_and_columns() {
        let table = sample_table();
        let picked = table.take([2, 0]).unwrap();

        assert_eq!(picked.columns(), table.columns());
        assert_eq!(picked.row_count(), 2);
        assert_eq!(picked.rows()[0].index, 2);
        assert_eq!(picked.value(1, "name"), Some("ann"));
    }

    #[test]
    fn test_take_out_of_bounds() {
        let err = sample_table().take([3]).unwrap_err();
        assert_eq!(err, TableError::OutOfBounds { position: 3, len: 3 });
    }

    #[test]
    fn test_column_values() {
        let table = sample_table();
        let names: Vec<_> = table.column_values(1).collect();
        assert_eq!(names, vec!["ann", "bob", "cid"]);
    }
}
