use std_util::str;
use syn::ext::IdentExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssociationKind {
    BelongsTo,
    HasMany,
    HasOneThrough,
    HasManyThrough,
}

impl AssociationKind {
    pub(crate) fn from_path(path: &syn::Path) -> Option<Self> {
        if path.is_ident("belongs_to") {
            Some(Self::BelongsTo)
        } else if path.is_ident("has_many") {
            Some(Self::HasMany)
        } else if path.is_ident("has_one_through") {
            Some(Self::HasOneThrough)
        } else if path.is_ident("has_many_through") {
            Some(Self::HasManyThrough)
        } else {
            None
        }
    }

    fn attr_name(self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs_to",
            Self::HasMany => "has_many",
            Self::HasOneThrough => "has_one_through",
            Self::HasManyThrough => "has_many_through",
        }
    }

    pub(crate) fn is_through(self) -> bool {
        matches!(self, Self::HasOneThrough | Self::HasManyThrough)
    }

    /// Resolves to a collection rather than a single record.
    pub(crate) fn is_plural(self) -> bool {
        matches!(self, Self::HasMany | Self::HasManyThrough)
    }
}

/// One association attribute on a record struct, e.g.
/// `#[belongs_to(human, foreign_key = "owner_id")]` or
/// `#[has_one_through(home, through = "human", source = "house")]`.
#[derive(Debug)]
pub(crate) struct Association {
    pub(crate) kind: AssociationKind,

    /// Association name, also the name of the generated accessor
    pub(crate) ident: syn::Ident,

    pub(crate) foreign_key: Option<syn::LitStr>,

    pub(crate) primary_key: Option<syn::LitStr>,

    /// Target record type
    pub(crate) class_name: syn::Ident,

    pub(crate) through: Option<syn::LitStr>,

    pub(crate) source: Option<syn::LitStr>,
}

impl Association {
    pub(super) fn from_ast(kind: AssociationKind, attr: &syn::Attribute) -> syn::Result<Self> {
        let mut ident: Option<syn::Ident> = None;
        let mut foreign_key = None;
        let mut primary_key = None;
        let mut class_name: Option<syn::LitStr> = None;
        let mut through = None;
        let mut source: Option<syn::LitStr> = None;

        attr.parse_nested_meta(|meta| {
            if !meta.input.peek(syn::Token![=]) {
                // The bare association name comes first
                if ident.is_some() {
                    return Err(meta.error("association name given twice"));
                }

                ident = Some(meta.path.require_ident()?.clone());
                return Ok(());
            }

            let slot = if meta.path.is_ident("class_name") {
                &mut class_name
            } else if kind.is_through() && meta.path.is_ident("through") {
                &mut through
            } else if kind.is_through() && meta.path.is_ident("source") {
                &mut source
            } else if !kind.is_through() && meta.path.is_ident("foreign_key") {
                &mut foreign_key
            } else if !kind.is_through() && meta.path.is_ident("primary_key") {
                &mut primary_key
            } else if kind.is_through() {
                return Err(meta.error("expected `through`, `source`, or `class_name`"));
            } else {
                return Err(meta.error("expected `foreign_key`, `primary_key`, or `class_name`"));
            };

            if slot.is_some() {
                return Err(meta.error("duplicate option"));
            }

            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        let Some(ident) = ident else {
            return Err(syn::Error::new_spanned(
                attr,
                format!("expected #[{}(<name>, ...)]", kind.attr_name()),
            ));
        };

        if kind.is_through() && (through.is_none() || source.is_none()) {
            return Err(syn::Error::new_spanned(
                attr,
                format!(
                    "expected #[{}({ident}, through = \"...\", source = \"...\")]",
                    kind.attr_name()
                ),
            ));
        }

        // Through associations name their target after the source association
        let target_name = match &source {
            Some(source) => source.value(),
            None => ident.unraw().to_string(),
        };

        let class_name = match class_name {
            Some(lit) => lit.parse::<syn::Ident>()?,
            None if kind.is_plural() => syn::Ident::new(&str::classify(&target_name), ident.span()),
            None => syn::Ident::new(&str::camel_case(&target_name), ident.span()),
        };

        Ok(Self {
            kind,
            ident,
            foreign_key,
            primary_key,
            class_name,
            through,
            source,
        })
    }

    /// Association name as declared.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}
