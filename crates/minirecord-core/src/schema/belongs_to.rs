use super::AssociationOptions;

use std_util::str;

/// The declaring record holds the foreign key; it points at one target
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BelongsTo {
    /// Association name, e.g. `human`
    pub name: String,

    /// Column on the declaring table. Defaults to `<name>_id`.
    pub foreign_key: String,

    /// Column on the target table. Defaults to `id`.
    pub primary_key: String,

    /// Target record type. Defaults to the camel-cased name.
    pub class_name: String,
}

impl BelongsTo {
    pub fn new(name: &str, options: AssociationOptions) -> Self {
        Self {
            name: name.to_string(),
            foreign_key: options
                .foreign_key
                .unwrap_or_else(|| format!("{}_id", str::snake_case(name))),
            primary_key: options.primary_key.unwrap_or_else(|| "id".to_string()),
            class_name: options
                .class_name
                .unwrap_or_else(|| str::camel_case(name)),
        }
    }
}
