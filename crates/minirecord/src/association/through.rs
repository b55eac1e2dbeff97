use super::{lookup, wrong_kind};
use crate::{Db, Record, Result};

use minirecord_core::schema::{BelongsTo, Model};
use minirecord_sql::stmt::{ColumnRef, Select};

/// First hop of a through association: a belongs-to declared on `S`, along
/// with the model it points at.
fn first_hop<'db, S: Record>(db: &'db Db, through: &str) -> Result<(&'db BelongsTo, &'db Model)> {
    let model = S::model(db)?;
    let association = model.association(through)?;

    let Some(belongs_to) = association.as_belongs_to() else {
        return Err(wrong_kind(model, association, "belongs_to as the first hop"));
    };

    Ok((belongs_to, association.model(db.schema())?))
}

pub(crate) fn has_one_through<S: Record, T: Record>(
    record: &S,
    db: &Db,
    through: &str,
    source: &str,
) -> Result<Option<T>> {
    let (through_assoc, through_model) = first_hop::<S>(db, through)?;
    let association = lookup::<T>(through_model, source)?;

    let Some(source_assoc) = association.as_belongs_to() else {
        return Err(wrong_kind(through_model, association, "belongs_to"));
    };

    let through_table = through_model.table_name();
    let source_table = association.table_name(db.schema())?;

    let select = Select::through(
        through_table,
        source_table,
        (
            ColumnRef::qualified(through_table, &source_assoc.foreign_key),
            ColumnRef::qualified(source_table, &source_assoc.primary_key),
        ),
        &through_assoc.primary_key,
        record.read(&through_assoc.foreign_key)?,
    );

    let rows = db.exec(select)?.into_rows();

    // First match wins
    Ok(T::parse_all(rows)?.into_iter().next())
}

pub(crate) fn has_many_through<S: Record, T: Record>(
    record: &S,
    db: &Db,
    through: &str,
    source: &str,
) -> Result<Vec<T>> {
    let (through_assoc, through_model) = first_hop::<S>(db, through)?;
    let association = lookup::<T>(through_model, source)?;

    let Some(source_assoc) = association.as_has_many() else {
        return Err(wrong_kind(through_model, association, "has_many"));
    };

    let through_table = through_model.table_name();
    let source_table = association.table_name(db.schema())?;

    let select = Select::through(
        through_table,
        source_table,
        (
            ColumnRef::qualified(through_table, &source_assoc.primary_key),
            ColumnRef::qualified(source_table, &source_assoc.foreign_key),
        ),
        &through_assoc.primary_key,
        record.read(&through_assoc.foreign_key)?,
    );

    let rows = db.exec(select)?.into_rows();
    T::parse_all(rows)
}
