mod belongs_to;
pub(crate) use belongs_to::belongs_to;

mod has_many;
pub(crate) use has_many::has_many;

mod through;
pub(crate) use through::{has_many_through, has_one_through};

use crate::{Db, Error, Record, Result};

use minirecord_core::schema::{Association, Model};

/// Looks up association `name` declared on `model` and checks that it
/// targets `T`.
fn lookup<'db, T: Record>(model: &'db Model, name: &str) -> Result<&'db Association> {
    let association = model.association(name)?;

    if association.class_name() != T::NAME {
        return Err(Error::invalid_association(
            model.name(),
            name,
            format!(
                "targets `{}`, not `{}`",
                association.class_name(),
                T::NAME
            ),
        ));
    }

    Ok(association)
}

/// Looks up association `name` declared on `S` and checks that it targets
/// `T`.
pub(crate) fn declared<'db, S: Record, T: Record>(db: &'db Db, name: &str) -> Result<&'db Association> {
    lookup::<T>(S::model(db)?, name)
}

fn wrong_kind(model: &Model, association: &Association, expected: &str) -> Error {
    Error::unsupported_operation(format!(
        "`{}::{}` is a {} association; expected {}",
        model.name(),
        association.name(),
        association.kind_name(),
        expected
    ))
}
