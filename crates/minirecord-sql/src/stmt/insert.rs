use super::Value;

/// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Insert {
    /// Pairs each column with its value, in order.
    pub fn new(table: impl Into<String>, columns: Vec<String>, values: Vec<Value>) -> Insert {
        assert_eq!(
            columns.len(),
            values.len(),
            "insert must bind one value per column"
        );

        Insert {
            table: table.into(),
            columns,
            values,
        }
    }
}
