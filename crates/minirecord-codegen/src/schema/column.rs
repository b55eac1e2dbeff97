use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Column {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Column name, the field name without any `r#` prefix
    pub(crate) name: String,

    /// The `T` in the field's `Option<T>`
    pub(crate) ty: syn::Type,
}

impl Column {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let Some(ty) = option_inner(&field.ty) else {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "record fields must be `Option<T>`",
            ));
        };

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: ty.clone(),
        })
    }

    /// `set_<name>`
    pub(crate) fn setter_ident(&self) -> syn::Ident {
        quote::format_ident!("set_{}", self.name, span = self.ident.span())
    }
}

fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match (args.args.len(), args.args.first()?) {
        (1, syn::GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}
