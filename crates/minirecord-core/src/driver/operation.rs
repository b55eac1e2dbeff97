mod exec_sql;
pub use exec_sql::ExecSql;

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute a statement that returns rows
    QuerySql(QuerySql),

    /// Execute a statement that only reports the number of affected rows
    ExecSql(ExecSql),
}

impl Operation {
    /// The SQL text of the operation.
    pub fn sql(&self) -> &str {
        match self {
            Operation::QuerySql(op) => &op.sql,
            Operation::ExecSql(op) => &op.sql,
        }
    }

    pub fn is_query_sql(&self) -> bool {
        matches!(self, Operation::QuerySql(_))
    }

    pub fn is_exec_sql(&self) -> bool {
        matches!(self, Operation::ExecSql(_))
    }
}
