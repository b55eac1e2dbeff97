use crate::{association, eager, Db, Included, Relation, Result};

use minirecord_core::{
    schema::{Associations, Model},
    stmt::{Attributes, RecordSet, Value},
};
use minirecord_sql::stmt::{Insert, Select, Update};

/// Column holding each record's identity.
pub(crate) const PRIMARY_KEY: &str = "id";

/// A type bound to one database table, one instance per row.
///
/// Implemented with `#[derive(Record)]`. The derive supplies the type's
/// metadata and the uniform [`read`](Record::read) / [`write`](Record::write)
/// accessors; everything else is provided in terms of those.
pub trait Record: Sized + Clone + core::fmt::Debug + 'static {
    /// Type name, used to look the type up in a [`Db`]'s schema
    const NAME: &'static str;

    const TABLE_NAME: &'static str;

    /// Columns backed by the struct's fields, in declaration order
    const COLUMNS: &'static [&'static str];

    /// Direct associations declared on the type
    fn associations() -> Associations;

    /// An instance with every attribute unset.
    fn blank() -> Self;

    /// Reads one attribute. An unset attribute reads as `NULL`.
    fn read(&self, column: &str) -> Result<Value>;

    /// Writes one attribute. `NULL` unsets it.
    fn write(&mut self, column: &str, value: Value) -> Result<()>;

    fn table_name() -> &'static str {
        Self::TABLE_NAME
    }

    /// The type's registered metadata.
    fn model(db: &Db) -> Result<&Model> {
        db.schema().model(Self::NAME)
    }

    /// Reflected column names, in table order.
    fn columns(db: &Db) -> Result<&[String]> {
        Ok(Self::model(db)?.columns())
    }

    /// Builds an instance from an attribute map. Any key that is not a
    /// column fails with an unknown attribute error.
    fn new(attrs: impl Into<Attributes>) -> Result<Self> {
        let mut record = Self::blank();

        for (column, value) in attrs.into() {
            record.write(&column, value)?;
        }

        Ok(record)
    }

    /// One instance per row.
    fn parse_all(rows: RecordSet) -> Result<Vec<Self>> {
        rows.into_attributes().map(Self::new).collect()
    }

    fn all(db: &Db) -> Result<Vec<Self>> {
        let model = Self::model(db)?;
        let rows = db.exec(Select::all(model.table_name()))?.into_rows();
        Self::parse_all(rows)
    }

    /// The record with the given id, or `None`.
    fn find(db: &Db, id: i64) -> Result<Option<Self>> {
        let model = Self::model(db)?;
        let rows = db
            .exec(Select::find(model.table_name(), PRIMARY_KEY, id))?
            .into_rows();
        Ok(Self::parse_all(rows)?.into_iter().next())
    }

    /// A lazy query for the records matching every criterion.
    fn filter(db: &Db, criteria: impl Into<Attributes>) -> Relation<'_, Self> {
        Relation::new(db, criteria.into())
    }

    /// The attributes that are set, in declaration order.
    fn attributes(&self) -> Result<Attributes> {
        let mut attributes = Attributes::with_capacity(Self::COLUMNS.len());

        for &column in Self::COLUMNS {
            let value = self.read(column)?;
            if !value.is_null() {
                attributes.insert(column, value);
            }
        }

        Ok(attributes)
    }

    /// Every attribute, in reflected column order.
    fn attribute_values(&self, db: &Db) -> Result<Vec<Value>> {
        Self::columns(db)?
            .iter()
            .map(|column| self.read(column))
            .collect()
    }

    /// Inserts every column, then takes the id the database assigned.
    fn insert(&mut self, db: &Db) -> Result<()> {
        let model = Self::model(db)?;
        let values = self.attribute_values(db)?;

        db.exec(Insert::new(
            model.table_name(),
            model.columns().to_vec(),
            values,
        ))?;

        let id = db.last_insert_id()?;
        self.write(PRIMARY_KEY, Value::Integer(id))
    }

    /// Writes every column to the row with this record's id.
    fn update(&self, db: &Db) -> Result<()> {
        let model = Self::model(db)?;

        let mut assignments = Vec::with_capacity(model.columns().len());
        for column in model.columns() {
            assignments.push((column.clone(), self.read(column)?));
        }

        db.exec(Update::by_key(
            model.table_name(),
            assignments,
            PRIMARY_KEY,
            self.read(PRIMARY_KEY)?,
        ))?;
        Ok(())
    }

    /// Inserts when the id is unset, otherwise updates.
    fn save(&mut self, db: &Db) -> Result<()> {
        if self.read(PRIMARY_KEY)?.is_null() {
            self.insert(db)
        } else {
            self.update(db)
        }
    }

    /// The target of a belongs-to association: the first record whose
    /// primary key equals this record's foreign key.
    fn belongs_to<T: Record>(&self, db: &Db, name: &str) -> Result<Option<T>> {
        association::belongs_to(self, db, name)
    }

    /// The records of a has-many association, as a lazy query.
    fn has_many<'db, T: Record>(&self, db: &'db Db, name: &str) -> Result<Relation<'db, T>> {
        association::has_many(self, db, name)
    }

    /// Follows the belongs-to association `through`, then the belongs-to
    /// association `source` declared on its target, in one join query.
    fn has_one_through<T: Record>(&self, db: &Db, through: &str, source: &str) -> Result<Option<T>> {
        association::has_one_through(self, db, through, source)
    }

    /// Follows the belongs-to association `through`, then the has-many
    /// association `source` declared on its target, in one join query.
    fn has_many_through<T: Record>(&self, db: &Db, through: &str, source: &str) -> Result<Vec<T>> {
        association::has_many_through(self, db, through, source)
    }

    /// Loads every record together with its `name` association using
    /// exactly two queries.
    fn includes<A: Record>(db: &Db, name: &str) -> Result<Vec<Included<Self, A>>> {
        eager::includes(db, name)
    }
}
