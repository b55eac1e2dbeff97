use crate::{association, Db, Record, Result};

use minirecord_core::stmt::Value;
use std::{collections::HashMap, ops::Deref};

/// A record loaded together with one of its associations.
///
/// Derefs to the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Included<T, A> {
    record: T,
    associated: Vec<A>,
}

impl<T, A> Included<T, A> {
    pub fn record(&self) -> &T {
        &self.record
    }

    /// The associated records: at most one for a belongs-to association.
    pub fn associated(&self) -> &[A] {
        &self.associated
    }

    /// The single associated record of a belongs-to association.
    pub fn one(&self) -> Option<&A> {
        self.associated.first()
    }

    pub fn into_parts(self) -> (T, Vec<A>) {
        (self.record, self.associated)
    }
}

impl<T, A> Deref for Included<T, A> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.record
    }
}

/// Loads every `T` and every `A`, then matches them in memory on the
/// association's keys. Two queries no matter how many records there are.
pub(crate) fn includes<T: Record, A: Record>(db: &Db, name: &str) -> Result<Vec<Included<T, A>>> {
    let association = association::declared::<T, A>(db, name)?;
    let single = association.is_belongs_to();

    let records = T::all(db)?;
    let targets = A::all(db)?;

    // `other_key` value -> positions in `targets`. NULL never matches.
    let mut index: HashMap<Value, Vec<usize>> = HashMap::new();
    for (position, target) in targets.iter().enumerate() {
        let key = target.read(association.other_key())?;

        if !key.is_null() {
            index.entry(key).or_default().push(position);
        }
    }

    tracing::debug!(
        association = name,
        records = records.len(),
        targets = targets.len(),
        "eager loaded association"
    );

    let mut included = Vec::with_capacity(records.len());

    for record in records {
        let key = record.read(association.self_key())?;

        let mut associated: Vec<A> = match index.get(&key) {
            Some(positions) if !key.is_null() => positions
                .iter()
                .map(|&position| targets[position].clone())
                .collect(),
            _ => vec![],
        };

        // A belongs-to resolves to its first match only
        if single {
            associated.truncate(1);
        }

        included.push(Included { record, associated });
    }

    Ok(included)
}
