use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A getter and a setter per column.
    pub(super) fn expand_accessors(&self) -> TokenStream {
        let minirecord = &self.minirecord;
        let vis = &self.model.vis;

        self.model
            .columns
            .iter()
            .map(|column| {
                let field = &column.ident;
                let setter = column.setter_ident();
                let ty = &column.ty;

                quote! {
                    #vis fn #field(&self) -> #minirecord::Option<#ty> {
                        #minirecord::Option::clone(&self.#field)
                    }

                    #vis fn #setter(&mut self, value: impl #minirecord::Into<#ty>) {
                        self.#field = #minirecord::Some(value.into());
                    }
                }
            })
            .collect()
    }
}
