extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `minirecord::Record` for a struct whose fields are all
/// `Option<T>`, one per table column, and generates a getter and a
/// `set_<column>` setter per field plus one accessor per association.
///
/// Struct attributes:
///
/// - `#[table = "..."]` overrides the table name (default: the type name,
///   snake cased and pluralized)
/// - `#[belongs_to(name, foreign_key = "..", primary_key = "..", class_name = "..")]`
/// - `#[has_many(name, foreign_key = "..", primary_key = "..", class_name = "..")]`
/// - `#[has_one_through(name, through = "..", source = "..", class_name = "..")]`
/// - `#[has_many_through(name, through = "..", source = "..", class_name = "..")]`
#[proc_macro_derive(
    Record,
    attributes(table, belongs_to, has_many, has_one_through, has_many_through)
)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match minirecord_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
