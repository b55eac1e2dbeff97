mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

mod connection;
pub use connection::ConnectionManager;

use crate::Result;

use minirecord_core::{
    driver::{
        operation::{ExecSql, QuerySql},
        Response,
    },
    stmt::{RecordSet, Value},
    Schema,
};
use minirecord_sql::{Serializer, Statement};

/// A handle to one database: the connection manager plus the metadata of
/// every registered record type.
///
/// `Db` is single-threaded. All record types and relations built from it
/// funnel their statements through the same connection, one at a time.
#[derive(Debug)]
pub struct Db {
    connection: ConnectionManager,
    schema: Schema,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(connection: ConnectionManager, schema: Schema) -> Db {
        Db { connection, schema }
    }

    /// Metadata for every registered record type.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn connection(&self) -> &ConnectionManager {
        &self.connection
    }

    /// Drops the live connection, destroys the database, and rebuilds it from
    /// the schema script.
    ///
    /// Reflected columns are kept as they are.
    pub fn reset(&self) -> Result<()> {
        self.connection.reset()
    }

    /// Generates SQL for `stmt` and runs it.
    pub fn exec(&self, stmt: impl Into<Statement>) -> Result<Response> {
        let stmt = stmt.into();

        let mut params = vec![];
        let sql = Serializer::new().serialize(&stmt, &mut params);

        if stmt.is_query() {
            self.connection.exec(QuerySql::new(sql, params).into())
        } else {
            self.connection.exec(ExecSql::new(sql, params).into())
        }
    }

    pub fn query(&self, sql: &str, params: Vec<Value>) -> Result<RecordSet> {
        self.connection.query(sql, params)
    }

    pub fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64> {
        self.connection.execute(sql, params)
    }

    pub fn last_insert_id(&self) -> Result<i64> {
        self.connection.last_insert_id()
    }
}
