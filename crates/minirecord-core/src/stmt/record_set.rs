use super::{Attributes, Value};

/// Rows returned by a query, preceded by their column header.
///
/// The header is available even when no rows match, which is what schema
/// reflection relies on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: vec![],
        }
    }

    /// Appends a row. The row must have one value per column.
    #[track_caller]
    pub fn push(&mut self, row: Vec<Value>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width does not match the column header"
        );
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts each row into an attribute map keyed by column name.
    pub fn into_attributes(self) -> impl Iterator<Item = Attributes> {
        let columns = self.columns;
        self.rows
            .into_iter()
            .map(move |row| columns.iter().cloned().zip(row).collect())
    }
}
