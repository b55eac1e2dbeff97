use super::{Association, Column, ErrorSet, ModelAttr};

use std_util::str;

#[derive(Debug)]
pub(crate) struct Model {
    /// Record type visibility, reused for generated accessors
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Table the type maps to
    pub(crate) table_name: String,

    /// One column per field, in declaration order
    pub(crate) columns: Vec<Column>,

    pub(crate) associations: Vec<Association>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut columns = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for field in &node.named {
            match Column::from_ast(field) {
                Ok(column) => columns.push(column),
                Err(err) => errs.push(err),
            }
        }

        for association in &model_attr.associations {
            if columns
                .iter()
                .any(|column| column.ident == association.ident)
            {
                errs.push(syn::Error::new_spanned(
                    &association.ident,
                    "association name conflicts with a column accessor",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let table_name = match &model_attr.table {
            Some(lit) => lit.value(),
            None => str::tableize(&ast.ident.to_string()),
        };

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            table_name,
            columns,
            associations: model_attr.associations,
        })
    }

    /// Type name, e.g. `Cat`
    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }
}
