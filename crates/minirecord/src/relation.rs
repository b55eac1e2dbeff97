use crate::{Db, Error, Record, Result};

use minirecord_core::stmt::{Attributes, Value};
use minirecord_sql::{stmt::Select, Serializer, Statement};
use once_cell::unsync::OnceCell;

/// A lazy query for the records of `T` matching every criterion.
///
/// Nothing is queried until the records are first observed; after that the
/// loaded records are kept and the relation never queries again, even if the
/// table changes. [`filter`](Relation::filter) returns a new relation with the
/// merged criteria and leaves this one untouched.
pub struct Relation<'db, T> {
    db: &'db Db,

    /// Column -> expected value, ANDed in insertion order
    criteria: Attributes,

    /// Records, once loaded
    cache: OnceCell<Vec<T>>,
}

impl<'db, T: Record> Relation<'db, T> {
    pub(crate) fn new(db: &'db Db, criteria: Attributes) -> Self {
        Self {
            db,
            criteria,
            cache: OnceCell::new(),
        }
    }

    /// A new relation with this relation's criteria merged with `criteria`.
    /// On a key collision the new value wins.
    pub fn filter(&self, criteria: impl Into<Attributes>) -> Relation<'db, T> {
        Relation::new(self.db, self.criteria.clone().merged(criteria.into()))
    }

    pub fn criteria(&self) -> &Attributes {
        &self.criteria
    }

    pub fn table_name(&self) -> &'static str {
        T::TABLE_NAME
    }

    /// The SQL and bound parameters this relation runs when loaded.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut params = vec![];
        let stmt = Statement::from(Select::filter(T::TABLE_NAME, &self.criteria));
        let sql = Serializer::new().serialize(&stmt, &mut params);
        (sql, params)
    }

    /// True once the records have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Loads the records on first call; returns the kept records afterwards.
    pub fn load(&self) -> Result<&[T]> {
        self.cache
            .get_or_try_init(|| materialize(self.db, &self.criteria))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    pub fn first(&self) -> Result<Option<&T>> {
        Ok(self.load()?.first())
    }

    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        Ok(self.load()?.get(index))
    }

    pub fn iter(&self) -> Result<std::slice::Iter<'_, T>> {
        Ok(self.load()?.iter())
    }

    pub fn to_vec(&self) -> Result<Vec<T>> {
        Ok(self.load()?.to_vec())
    }

    pub fn into_vec(self) -> Result<Vec<T>> {
        let Relation {
            db,
            criteria,
            cache,
        } = self;

        match cache.into_inner() {
            Some(records) => Ok(records),
            None => materialize(db, &criteria),
        }
    }

    fn loaded_or_warn(&self) -> Option<&[T]> {
        match self.load() {
            Ok(records) => Some(records),
            Err(err) => {
                tracing::warn!(table = T::TABLE_NAME, error = %err, "failed to load relation");
                None
            }
        }
    }
}

fn materialize<T: Record>(db: &Db, criteria: &Attributes) -> Result<Vec<T>> {
    let model = T::model(db)?;

    // Column names are written into the SQL text
    if let Some(column) = criteria.keys().find(|column| !model.has_column(column)) {
        return Err(Error::unknown_attribute(column));
    }

    let rows = db
        .exec(Select::filter(model.table_name(), criteria))?
        .into_rows();
    T::parse_all(rows)
}

impl<T: Record> core::fmt::Debug for Relation<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Relation")
            .field("table", &T::TABLE_NAME)
            .field("criteria", &self.criteria)
            .field("records", &self.cache.get())
            .finish()
    }
}

impl<T: Record + PartialEq> PartialEq<[T]> for Relation<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.loaded_or_warn() == Some(other)
    }
}

impl<T: Record + PartialEq> PartialEq<Vec<T>> for Relation<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.loaded_or_warn() == Some(&other[..])
    }
}

impl<T: Record + PartialEq, const N: usize> PartialEq<[T; N]> for Relation<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.loaded_or_warn() == Some(&other[..])
    }
}
