/// Overrides for an association's inferred keys and target type.
///
/// Every field left unset falls back to the naming convention of the
/// association kind (see [`BelongsTo::new`](super::BelongsTo::new) and
/// [`HasMany::new`](super::HasMany::new)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationOptions {
    pub foreign_key: Option<String>,
    pub primary_key: Option<String>,
    pub class_name: Option<String>,
}

impl AssociationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = Some(primary_key.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}
