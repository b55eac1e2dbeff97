mod accessors;
mod association;
mod record;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record type being expanded
    model: &'a Model,

    /// Path prefix for minirecord types
    minirecord: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let accessors = self.expand_accessors();
        let association_methods = self.expand_association_methods();
        let ident = &self.model.ident;

        wrap_in_const(quote! {
            #record_impl

            impl #ident {
                #accessors
                #association_methods
            }
        })
    }
}

pub(super) fn record(model: &Model) -> TokenStream {
    Expand {
        model,
        minirecord: quote!(_minirecord::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use minirecord as _minirecord;
            #code
        };
    }
}
