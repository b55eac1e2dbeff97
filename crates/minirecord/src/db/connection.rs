use crate::{err, Result};

use minirecord_core::{
    driver::{
        operation::{ExecSql, QuerySql},
        Operation, Response,
    },
    stmt::{RecordSet, Value},
    Connection, Driver,
};
use std::cell::{RefCell, RefMut};

/// Owns the single live connection to the database.
///
/// The first statement issued while no connection is open triggers a full
/// reset: the backing store is destroyed, a fresh connection is opened, and
/// the schema script is replayed on it. Nothing else reconnects; a failed
/// statement is reported to the caller and not retried.
#[derive(Debug)]
pub struct ConnectionManager {
    driver: Box<dyn Driver>,

    /// Canonical DDL and seed data, replayed on every reset
    schema_script: String,

    connection: RefCell<Option<Box<dyn Connection>>>,
}

impl ConnectionManager {
    pub fn new(driver: Box<dyn Driver>, schema_script: impl Into<String>) -> Self {
        Self {
            driver,
            schema_script: schema_script.into(),
            connection: RefCell::new(None),
        }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// True once a connection has been opened.
    pub fn is_open(&self) -> bool {
        self.connection.borrow().is_some()
    }

    /// The live connection, opening (and resetting) the database first if
    /// needed.
    pub fn instance(&self) -> Result<RefMut<'_, Box<dyn Connection>>> {
        if !self.is_open() {
            self.reset()?;
        }

        RefMut::filter_map(self.connection.borrow_mut(), Option::as_mut)
            .map_err(|_| err!("database connection is not open"))
    }

    /// Destroys the database and rebuilds it from the schema script.
    pub fn reset(&self) -> Result<()> {
        tracing::info!(url = %self.driver.url(), "resetting database");

        // Close the current connection before the backing store goes away
        self.connection.borrow_mut().take();

        self.driver.reset()?;

        let mut connection = self.driver.connect()?;
        connection.execute_batch(&self.schema_script)?;

        *self.connection.borrow_mut() = Some(connection);
        Ok(())
    }

    /// Runs one statement on the live connection.
    pub fn exec(&self, op: Operation) -> Result<Response> {
        let mut connection = self.instance()?;

        match &op {
            Operation::QuerySql(query) => {
                tracing::debug!(target: "minirecord::sql", sql = %query.sql, params = ?query.params, "query");
            }
            Operation::ExecSql(exec) => {
                tracing::debug!(target: "minirecord::sql", sql = %exec.sql, params = ?exec.params, "execute");
            }
        }

        connection.exec(op)
    }

    /// Runs a hand-written statement that returns rows.
    pub fn query(&self, sql: &str, params: Vec<Value>) -> Result<RecordSet> {
        Ok(self.exec(QuerySql::new(sql, params).into())?.into_rows())
    }

    /// Runs a hand-written statement, returning the number of affected rows.
    pub fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64> {
        Ok(self.exec(ExecSql::new(sql, params).into())?.into_count())
    }

    pub fn last_insert_id(&self) -> Result<i64> {
        Ok(self.instance()?.last_insert_id())
    }
}
