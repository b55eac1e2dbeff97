use super::Expand;
use crate::schema::AssociationKind;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let minirecord = &self.minirecord;
        let ident = &self.model.ident;
        let name = self.model.name();
        let table_name = &self.model.table_name;
        let column_names = self.model.columns.iter().map(|column| &column.name);
        let declarations = self.expand_association_declarations();
        let blank_fields = self.model.columns.iter().map(|column| {
            let field = &column.ident;
            quote!(#field: #minirecord::None,)
        });
        let read_arms = self.model.columns.iter().map(|column| {
            let field = &column.ident;
            let column_name = &column.name;
            let ty = &column.ty;
            quote! {
                #column_name => #minirecord::Ok(
                    <#ty as #minirecord::Primitive>::option_into_value(
                        #minirecord::Option::clone(&self.#field)
                    )
                ),
            }
        });
        let write_arms = self.model.columns.iter().map(|column| {
            let field = &column.ident;
            let column_name = &column.name;
            let ty = &column.ty;
            quote! {
                #column_name => {
                    self.#field = <#ty as #minirecord::Primitive>::load_option(value)?;
                    #minirecord::Ok(())
                }
            }
        });

        quote! {
            impl #minirecord::Record for #ident {
                const NAME: &'static str = #name;
                const TABLE_NAME: &'static str = #table_name;
                const COLUMNS: &'static [&'static str] = &[#( #column_names ),*];

                fn associations() -> #minirecord::Associations {
                    #[allow(unused_mut)]
                    let mut associations = #minirecord::Associations::new(#name);
                    #declarations
                    associations
                }

                fn blank() -> Self {
                    Self {
                        #( #blank_fields )*
                    }
                }

                fn read(&self, column: &str) -> #minirecord::Result<#minirecord::Value> {
                    match column {
                        #( #read_arms )*
                        _ => #minirecord::Err(#minirecord::Error::unknown_attribute(column)),
                    }
                }

                fn write(&mut self, column: &str, value: #minirecord::Value) -> #minirecord::Result<()> {
                    match column {
                        #( #write_arms )*
                        _ => #minirecord::Err(#minirecord::Error::unknown_attribute(column)),
                    }
                }
            }
        }
    }

    /// Registers the direct associations. Through associations are resolved
    /// from these at call time and are not registered.
    fn expand_association_declarations(&self) -> TokenStream {
        let minirecord = &self.minirecord;

        self.model
            .associations
            .iter()
            .filter(|association| !association.kind.is_through())
            .map(|association| {
                let name = association.name();
                let class_name = association.class_name.to_string();
                let method = match association.kind {
                    AssociationKind::BelongsTo => quote!(belongs_to),
                    _ => quote!(has_many),
                };
                let foreign_key = association
                    .foreign_key
                    .iter()
                    .map(|lit| quote!(.foreign_key(#lit)));
                let primary_key = association
                    .primary_key
                    .iter()
                    .map(|lit| quote!(.primary_key(#lit)));

                quote! {
                    associations.#method(
                        #name,
                        #minirecord::AssociationOptions::new()
                            .class_name(#class_name)
                            #( #foreign_key )*
                            #( #primary_key )*
                    );
                }
            })
            .collect()
    }
}
