use super::{BelongsTo, HasMany, Model, Schema};
use crate::Result;

/// A declared, direct association between two record types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Association {
    BelongsTo(BelongsTo),
    HasMany(HasMany),
}

impl Association {
    pub fn name(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.name,
            Association::HasMany(assoc) => &assoc.name,
        }
    }

    pub fn foreign_key(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.foreign_key,
            Association::HasMany(assoc) => &assoc.foreign_key,
        }
    }

    pub fn primary_key(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.primary_key,
            Association::HasMany(assoc) => &assoc.primary_key,
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.class_name,
            Association::HasMany(assoc) => &assoc.class_name,
        }
    }

    /// Resolves the target type's metadata.
    pub fn model<'a>(&self, schema: &'a Schema) -> Result<&'a Model> {
        schema.model(self.class_name())
    }

    pub fn table_name<'a>(&self, schema: &'a Schema) -> Result<&'a str> {
        Ok(self.model(schema)?.table_name())
    }

    /// Column on the declaring record that the target is matched against.
    pub fn self_key(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.foreign_key,
            Association::HasMany(assoc) => &assoc.primary_key,
        }
    }

    /// Column on the target record that holds the matching value.
    pub fn other_key(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.primary_key,
            Association::HasMany(assoc) => &assoc.foreign_key,
        }
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self, Association::BelongsTo(_))
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self, Association::HasMany(_))
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        match self {
            Association::BelongsTo(assoc) => Some(assoc),
            _ => None,
        }
    }

    pub fn as_has_many(&self) -> Option<&HasMany> {
        match self {
            Association::HasMany(assoc) => Some(assoc),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Association::BelongsTo(_) => "belongs_to",
            Association::HasMany(_) => "has_many",
        }
    }
}

impl From<BelongsTo> for Association {
    fn from(value: BelongsTo) -> Self {
        Association::BelongsTo(value)
    }
}

impl From<HasMany> for Association {
    fn from(value: HasMany) -> Self {
        Association::HasMany(value)
    }
}
