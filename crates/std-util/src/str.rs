//! Inflection helpers used to derive table, type, and key names.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// `HumanBeing` -> `human_being`
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// `human_being` -> `HumanBeing`
pub fn camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

pub fn singularize(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

/// Default table name for a record type: snake cased, then pluralized.
pub fn tableize(type_name: &str) -> String {
    pluralize(&snake_case(type_name))
}

/// Type name for a table: singularized, then camel cased.
pub fn classify(table_name: &str) -> String {
    camel_case(&singularize(table_name))
}
