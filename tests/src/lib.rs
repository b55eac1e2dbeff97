mod exec_log;
pub use exec_log::ExecLog;

pub use logging_driver::{DriverOp, LoggingDriver};

pub mod models;
use models::{Cat, House, Human};

pub use std_util::prelude::*;

use minirecord::{db, Db};
use minirecord_driver_sqlite::Sqlite;

/// Houses, humans, and their cats: the schema and seed rows every test
/// starts from.
pub const CATS_SQL: &str = include_str!("../fixtures/cats.sql");

/// Path of [`CATS_SQL`] on disk.
pub const CATS_SQL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/cats.sql");

/// Routes `tracing` output to the test harness. `RUST_LOG=minirecord::sql=debug`
/// shows every statement.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A builder with the fixture record types registered and the fixture
/// schema script.
pub fn models() -> db::Builder {
    let mut builder = Db::builder();
    builder
        .register::<Cat>()
        .register::<Human>()
        .register::<House>()
        .schema_script(CATS_SQL);
    builder
}

/// A fresh in-memory database seeded from the fixture.
pub fn setup() -> Db {
    init_tracing();
    models().build().unwrap()
}

/// Like [`setup`], recording every statement. Statements issued while
/// building (table reflection) are cleared from the log.
pub fn setup_logged() -> (Db, ExecLog) {
    init_tracing();

    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let mut log = ExecLog::new(driver.ops_log_handle());

    let db = models().driver(driver).build().unwrap();
    log.clear();

    (db, log)
}
