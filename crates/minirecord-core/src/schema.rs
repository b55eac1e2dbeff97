mod association;
pub use association::Association;

mod associations;
pub use associations::Associations;

mod belongs_to;
pub use belongs_to::BelongsTo;

mod has_many;
pub use has_many::HasMany;

mod model;
pub use model::Model;

mod options;
pub use options::AssociationOptions;

use crate::{Error, Result};

use indexmap::IndexMap;

/// Metadata for every record type registered with a database, keyed by type
/// name.
#[derive(Debug, Default)]
pub struct Schema {
    models: IndexMap<String, Model>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model, replacing any earlier model with the same name.
    pub fn insert(&mut self, model: Model) {
        self.models.insert(model.name().to_string(), model);
    }

    /// Looks up a model by type name.
    pub fn model(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| Error::unknown_model(name))
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> + '_ {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
