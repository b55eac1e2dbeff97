use super::Operation;

use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    /// The SQL query to execute
    pub sql: String,

    /// Positional parameters, bound in order to the `?` placeholders
    pub params: Vec<Value>,
}

impl QuerySql {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
