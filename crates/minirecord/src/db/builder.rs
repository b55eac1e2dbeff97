use super::{connect, ConnectionManager, Db};
use crate::{bail, schema, Error, Record, Result};

use minirecord_core::{
    schema::{Associations, Model},
    Driver, Schema,
};
use std::path::{Path, PathBuf};

/// Configures and opens a [`Db`].
///
/// ```no_run
/// # use minirecord::Db;
/// # fn run() -> minirecord::Result<()> {
/// let db = Db::builder()
///     .url("sqlite:cats.db")
///     .schema_file("cats.sql")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    /// Record types to register, in registration order
    models: Vec<Registration>,

    driver: Option<Box<dyn Driver>>,

    /// Set once a configured driver has been handed to a built `Db`
    driver_used: bool,

    url: Option<String>,

    schema: Option<SchemaSource>,
}

#[derive(Debug)]
struct Registration {
    name: &'static str,
    table_name: &'static str,
    columns: &'static [&'static str],
    associations: fn() -> Associations,
}

#[derive(Debug)]
enum SchemaSource {
    Script(String),
    File(PathBuf),
}

impl Builder {
    /// Registers a record type. Its table is reflected when the database is
    /// built.
    pub fn register<T: Record>(&mut self) -> &mut Self {
        self.models.push(Registration {
            name: T::NAME,
            table_name: T::TABLE_NAME,
            columns: T::COLUMNS,
            associations: T::associations,
        });
        self
    }

    /// Connection URL, e.g. `sqlite::memory:` or `sqlite:<path>`. Defaults to
    /// an in-memory SQLite database.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Uses an already configured driver instead of a URL.
    ///
    /// The driver moves into the built [`Db`]; building again needs a new
    /// one.
    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.driver = Some(Box::new(driver));
        self.driver_used = false;
        self
    }

    /// DDL and seed data replayed on every reset.
    pub fn schema_script(&mut self, script: impl Into<String>) -> &mut Self {
        self.schema = Some(SchemaSource::Script(script.into()));
        self
    }

    /// Like [`schema_script`](Self::schema_script), reading the script from
    /// a file when the database is built.
    pub fn schema_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.schema = Some(SchemaSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Opens the database and reflects every registered table.
    ///
    /// Reflection issues the first statement, so the database is reset from
    /// the schema script here.
    pub fn build(&mut self) -> Result<Db> {
        let driver = match self.driver.take() {
            Some(driver) => {
                self.driver_used = true;
                driver
            }
            None if self.driver_used => {
                bail!("the configured driver was already used by a previous build")
            }
            None => connect(self.url.as_deref().unwrap_or("sqlite::memory:"))?,
        };

        let script = match &self.schema {
            Some(SchemaSource::Script(script)) => script.clone(),
            Some(SchemaSource::File(path)) => std::fs::read_to_string(path).map_err(|err| {
                Error::from(err).context(format!("reading schema file {}", path.display()))
            })?,
            None => String::new(),
        };

        let connection = ConnectionManager::new(driver, script);
        let mut schema = Schema::new();

        for registration in &self.models {
            let columns = schema::columns_for(&connection, registration.table_name)?;
            registration.verify(&columns)?;

            let model = Model::new(registration.name, registration.table_name, columns)
                .with_associations((registration.associations)());

            tracing::debug!(
                model = model.name(),
                table = model.table_name(),
                associations = model.associations().len(),
                "registered record type"
            );
            schema.insert(model);
        }

        Ok(Db::new(connection, schema))
    }
}

impl Registration {
    /// Every reflected column needs a field and every field a column.
    fn verify(&self, reflected: &[String]) -> Result<()> {
        let context = || format!("registering `{}` for table `{}`", self.name, self.table_name);

        for column in reflected {
            if !self.columns.contains(&column.as_str()) {
                return Err(Error::unknown_attribute(column.as_str()).context(context()));
            }
        }

        for field in self.columns {
            if !reflected.iter().any(|column| column == field) {
                return Err(Error::unknown_attribute(*field).context(context()));
            }
        }

        Ok(())
    }
}
