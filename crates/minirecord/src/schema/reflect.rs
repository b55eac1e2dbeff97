use crate::{db::ConnectionManager, Result};

use minirecord_core::driver::operation::QuerySql;
use minirecord_sql::{stmt::Select, Serializer, Statement};

/// Column names of `table`, in table order.
///
/// Issues a zero-row `SELECT *` and reads the header of the result set.
pub fn columns_for(connection: &ConnectionManager, table: &str) -> Result<Vec<String>> {
    let mut params = vec![];
    let sql = Serializer::new().serialize(&Statement::from(Select::columns_of(table)), &mut params);

    let rows = connection.exec(QuerySql::new(sql, params).into())?.into_rows();
    let columns = rows.columns().to_vec();

    tracing::debug!(table, ?columns, "reflected table columns");
    Ok(columns)
}
