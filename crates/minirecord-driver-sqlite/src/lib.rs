mod value;
pub(crate) use value::Value;

use minirecord_core::{
    driver::{
        operation::{ExecSql, Operation, QuerySql},
        Driver, Response,
    },
    stmt::RecordSet,
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL: `sqlite::memory:`
    /// or `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn minirecord_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    fn reset(&self) -> Result<()> {
        match self {
            Sqlite::File(path) => {
                if path.exists() {
                    tracing::debug!(path = %path.display(), "removing database file");
                    std::fs::remove_file(path).map_err(Error::driver)?;
                }
            }
            Sqlite::InMemory => {
                // Nothing to do, each connect() creates a fresh in-memory database
            }
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    fn query(&mut self, op: QuerySql) -> Result<RecordSet> {
        let mut stmt = self.connection.prepare_cached(&op.sql).map_err(Error::driver)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = RecordSet::new(columns);

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        items.push(Value::from_sql(row, index)?.into_inner());
                    }

                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver(err)),
            }
        }

        Ok(ret)
    }

    fn execute(&mut self, op: ExecSql) -> Result<u64> {
        let mut stmt = self.connection.prepare_cached(&op.sql).map_err(Error::driver)?;

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        Ok(count as u64)
    }
}

impl minirecord_core::driver::Connection for Connection {
    fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => Ok(Response::rows(self.query(op)?)),
            Operation::ExecSql(op) => Ok(Response::count(self.execute(op)?)),
        }
    }

    fn execute_batch(&mut self, script: &str) -> Result<()> {
        self.connection.execute_batch(script).map_err(Error::driver)
    }

    fn last_insert_id(&self) -> i64 {
        self.connection.last_insert_rowid()
    }
}
