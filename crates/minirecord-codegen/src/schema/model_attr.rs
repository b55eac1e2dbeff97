use super::{Association, AssociationKind, ErrorSet};

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the record type to
    pub(crate) table: Option<syn::LitStr>,

    /// Association declarations, in declaration order
    pub(crate) associations: Vec<Association>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                match table_name(attr) {
                    Ok(lit) => self.table = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if let Some(kind) = AssociationKind::from_path(attr.path()) {
                match Association::from_ast(kind, attr) {
                    Ok(association) => {
                        if self
                            .associations
                            .iter()
                            .any(|existing| existing.ident == association.ident)
                        {
                            errs.push(syn::Error::new_spanned(
                                &association.ident,
                                format!("duplicate association `{}`", association.ident),
                            ));
                        } else {
                            self.associations.push(association);
                        }
                    }
                    Err(err) => errs.push(err),
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        ));
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `table = \"table_name\"`",
        ));
    };

    Ok(lit.clone())
}
