use super::{Association, AssociationOptions, BelongsTo, HasMany};

use indexmap::IndexMap;

/// Collects the direct associations one record type declares.
///
/// Declaring the same name twice keeps the later declaration.
#[derive(Debug, Clone)]
pub struct Associations {
    owner: String,
    entries: IndexMap<String, Association>,
}

impl Associations {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn belongs_to(&mut self, name: &str, options: AssociationOptions) -> &mut Self {
        self.entries
            .insert(name.to_string(), BelongsTo::new(name, options).into());
        self
    }

    pub fn has_many(&mut self, name: &str, options: AssociationOptions) -> &mut Self {
        self.entries.insert(
            name.to_string(),
            HasMany::new(name, &self.owner, options).into(),
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&Association> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_map(self) -> IndexMap<String, Association> {
        self.entries
    }
}
