mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one physical database and can destroy its backing
/// store.
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL of the database this driver targets.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Destroys the backing store so that the next connection starts from an
    /// empty database. Callers must drop any open connection first.
    fn reset(&self) -> crate::Result<()>;
}

/// A live database connection.
pub trait Connection: Debug + Send + 'static {
    /// Executes a single statement with positional parameters.
    fn exec(&mut self, op: Operation) -> crate::Result<Response>;

    /// Executes a script of `;`-separated statements without parameters.
    fn execute_batch(&mut self, script: &str) -> crate::Result<()>;

    /// Row id of the most recent successful insert on this connection.
    fn last_insert_id(&self) -> i64;
}
