use super::Operation;

use crate::stmt::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ExecSql {
    /// The SQL statement to execute
    pub sql: String,

    /// Positional parameters, bound in order to the `?` placeholders
    pub params: Vec<Value>,
}

impl ExecSql {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

impl From<ExecSql> for Operation {
    fn from(value: ExecSql) -> Self {
        Self::ExecSql(value)
    }
}
