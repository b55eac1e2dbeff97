use super::Expand;
use crate::schema::AssociationKind;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A typed accessor per association.
    pub(super) fn expand_association_methods(&self) -> TokenStream {
        let minirecord = &self.minirecord;
        let vis = &self.model.vis;

        self.model
            .associations
            .iter()
            .map(|association| {
                let ident = &association.ident;
                let name = association.name();
                let target = &association.class_name;

                match association.kind {
                    AssociationKind::BelongsTo => quote! {
                        #vis fn #ident(
                            &self,
                            db: &#minirecord::Db,
                        ) -> #minirecord::Result<#minirecord::Option<#target>> {
                            <Self as #minirecord::Record>::belongs_to::<#target>(self, db, #name)
                        }
                    },
                    AssociationKind::HasMany => quote! {
                        #vis fn #ident<'db>(
                            &self,
                            db: &'db #minirecord::Db,
                        ) -> #minirecord::Result<#minirecord::Relation<'db, #target>> {
                            <Self as #minirecord::Record>::has_many::<#target>(self, db, #name)
                        }
                    },
                    AssociationKind::HasOneThrough => {
                        let through = &association.through;
                        let source = &association.source;
                        quote! {
                            #vis fn #ident(
                                &self,
                                db: &#minirecord::Db,
                            ) -> #minirecord::Result<#minirecord::Option<#target>> {
                                <Self as #minirecord::Record>::has_one_through::<#target>(
                                    self, db, #through, #source,
                                )
                            }
                        }
                    }
                    AssociationKind::HasManyThrough => {
                        let through = &association.through;
                        let source = &association.source;
                        quote! {
                            #vis fn #ident(
                                &self,
                                db: &#minirecord::Db,
                            ) -> #minirecord::Result<std::vec::Vec<#target>> {
                                <Self as #minirecord::Record>::has_many_through::<#target>(
                                    self, db, #through, #source,
                                )
                            }
                        }
                    }
                }
            })
            .collect()
    }
}
