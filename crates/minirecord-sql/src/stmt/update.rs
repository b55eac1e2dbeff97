use super::{ColumnRef, Expr, Value};

/// `UPDATE <table> SET <col> = ? [, <col> = ?]* WHERE <filter>`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<(String, Value)>,
    pub filter: Expr,
}

impl Update {
    /// Updates the row whose `<table>.<primary_key>` equals `id`, which is
    /// bound after the assigned values.
    pub fn by_key(
        table: &str,
        assignments: Vec<(String, Value)>,
        primary_key: &str,
        id: impl Into<Value>,
    ) -> Update {
        Update {
            table: table.to_string(),
            assignments,
            filter: Expr::eq(ColumnRef::qualified(table, primary_key), Expr::value(id)),
        }
    }
}
