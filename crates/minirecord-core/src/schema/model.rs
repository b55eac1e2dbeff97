use super::{Association, Associations};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Per-type metadata: the bound table, its reflected columns, and the
/// associations declared by the type.
///
/// Built once when the type is registered with a database and read-only
/// afterwards. Columns are never re-reflected, even if the table changes.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    table_name: String,
    columns: Vec<String>,
    associations: IndexMap<String, Association>,
}

impl Model {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            columns,
            associations: IndexMap::new(),
        }
    }

    pub fn with_associations(mut self, associations: Associations) -> Self {
        self.associations = associations.into_map();
        self
    }

    /// Record type name, e.g. `Cat`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Column names in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn associations(&self) -> &IndexMap<String, Association> {
        &self.associations
    }

    /// Looks up a declared association by name.
    pub fn association(&self, name: &str) -> Result<&Association> {
        self.associations.get(name).ok_or_else(|| {
            Error::invalid_association(&self.name, name, "no such association is declared")
        })
    }
}
