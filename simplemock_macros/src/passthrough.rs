use quote::quote;
use syn::spanned::Spanned;

mod attr;
mod method;

pub use attr::Attr;

pub fn generate(attr: Attr, mut item_impl: syn::ItemImpl) -> syn::Result<proc_macro2::TokenStream> {
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "passthrough must be applied to an inherent impl block",
        ));
    }

    let original_calls = method::collect(&mut item_impl)?;

    let prefix = &attr.prefix;
    let self_ty = &item_impl.self_ty;
    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();

    let match_arms = original_calls
        .iter()
        .map(|original_call| original_call.match_arm(prefix));

    let attach_impl = if attr.attach {
        Some(quote! {
            impl #impl_generics #prefix::Attach for #self_ty #where_clause {
                type Host = Self;

                fn attach(self) -> #prefix::Mockable<Self> {
                    #prefix::Mockable::wrap(self)
                }
            }
        })
    } else {
        None
    };

    let output = quote! {
        #item_impl

        impl #impl_generics #prefix::Passthrough for #self_ty #where_clause {
            fn call_original(&self, name: &str) -> ::core::option::Option<#prefix::Output> {
                match name {
                    #(#match_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #attach_impl
    };

    if attr.debug {
        println!("{output}");
    }

    Ok(output)
}
