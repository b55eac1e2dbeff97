use minirecord_core::{stmt::Value as CoreValue, Error, Result};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads the value at `index` in a row, keeping SQLite's storage class.
    pub fn from_sql(row: &Row, index: usize) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => CoreValue::Integer(value),
            SqlValue::Real(value) => CoreValue::Real(value),
            SqlValue::Text(value) => CoreValue::Text(value),
            SqlValue::Blob(value) => CoreValue::Blob(value),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Integer(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::Real(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::Text(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Blob(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
        }
    }
}
