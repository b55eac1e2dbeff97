use super::AssociationOptions;

use std_util::str;

/// The target records hold the foreign key; they point back at the declaring
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasMany {
    /// Association name, e.g. `cats`
    pub name: String,

    /// Column on the target table. Defaults to `<declaring_type>_id`.
    pub foreign_key: String,

    /// Column on the declaring table. Defaults to `id`.
    pub primary_key: String,

    /// Target record type. Defaults to the singularized, camel-cased name.
    pub class_name: String,
}

impl HasMany {
    pub fn new(name: &str, self_class_name: &str, options: AssociationOptions) -> Self {
        Self {
            name: name.to_string(),
            foreign_key: options
                .foreign_key
                .unwrap_or_else(|| format!("{}_id", str::snake_case(self_class_name))),
            primary_key: options.primary_key.unwrap_or_else(|| "id".to_string()),
            class_name: options
                .class_name
                .unwrap_or_else(|| str::classify(name)),
        }
    }
}
