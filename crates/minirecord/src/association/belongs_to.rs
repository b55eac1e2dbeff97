use super::{declared, wrong_kind};
use crate::{Db, Record, Result};

use minirecord_core::stmt::Attributes;

pub(crate) fn belongs_to<S: Record, T: Record>(
    record: &S,
    db: &Db,
    name: &str,
) -> Result<Option<T>> {
    let association = declared::<S, T>(db, name)?;

    let Some(belongs_to) = association.as_belongs_to() else {
        return Err(wrong_kind(S::model(db)?, association, "belongs_to"));
    };

    let mut criteria = Attributes::with_capacity(1);
    criteria.insert(&belongs_to.primary_key, record.read(&belongs_to.foreign_key)?);

    // First match wins
    Ok(T::filter(db, criteria).into_vec()?.into_iter().next())
}
