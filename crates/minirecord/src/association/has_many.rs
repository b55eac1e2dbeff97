use super::{declared, wrong_kind};
use crate::{Db, Record, Relation, Result};

use minirecord_core::stmt::Attributes;

pub(crate) fn has_many<'db, S: Record, T: Record>(
    record: &S,
    db: &'db Db,
    name: &str,
) -> Result<Relation<'db, T>> {
    let association = declared::<S, T>(db, name)?;

    let Some(has_many) = association.as_has_many() else {
        return Err(wrong_kind(S::model(db)?, association, "has_many"));
    };

    let mut criteria = Attributes::with_capacity(1);
    criteria.insert(&has_many.foreign_key, record.read(&has_many.primary_key)?);

    Ok(T::filter(db, criteria))
}
