use quote::quote;

/// A method that can be reached by name as an original call.
pub struct OriginalCall {
    ident: syn::Ident,
    name: syn::LitStr,
}

impl OriginalCall {
    pub fn match_arm(&self, prefix: &syn::Path) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let name = &self.name;

        quote! {
            #name => ::core::option::Option::Some(#prefix::Output::new(Self::#ident(self))),
        }
    }
}

/// Find the original calls of an impl block.
///
/// `#[passthrough(skip)]` attributes are removed from the methods along the way.
pub fn collect(item_impl: &mut syn::ItemImpl) -> syn::Result<Vec<OriginalCall>> {
    let mut calls = vec![];

    for item in item_impl.items.iter_mut() {
        let syn::ImplItem::Fn(method) = item else {
            continue;
        };

        if take_skip_attr(&mut method.attrs)? {
            continue;
        }

        if is_original_call(&method.sig) {
            let ident = method.sig.ident.clone();
            let name = syn::LitStr::new(&ident.to_string(), ident.span());
            calls.push(OriginalCall { ident, name });
        }
    }

    Ok(calls)
}

fn take_skip_attr(attrs: &mut Vec<syn::Attribute>) -> syn::Result<bool> {
    let mut skip = false;
    let mut error = None;

    attrs.retain(|attr| {
        let is_ours = attr
            .path()
            .segments
            .last()
            .map(|segment| segment.ident == "passthrough")
            .unwrap_or(false);

        if !is_ours {
            return true;
        }

        match attr.parse_args::<syn::Ident>() {
            Ok(ident) if ident == "skip" => skip = true,
            Ok(ident) => error = Some(syn::Error::new(ident.span(), "Unrecognized keyword")),
            Err(err) => error = Some(err),
        }

        false
    });

    match error {
        Some(error) => Err(error),
        None => Ok(skip),
    }
}

// `fn name(&self) -> Output` with an owned output
fn is_original_call(sig: &syn::Signature) -> bool {
    if sig.asyncness.is_some()
        || sig.unsafety.is_some()
        || sig.variadic.is_some()
        || !sig.generics.params.is_empty()
        || sig.inputs.len() != 1
    {
        return false;
    }

    let Some(syn::FnArg::Receiver(receiver)) = sig.inputs.first() else {
        return false;
    };

    if receiver.reference.is_none()
        || receiver.mutability.is_some()
        || receiver.colon_token.is_some()
    {
        return false;
    }

    match &sig.output {
        syn::ReturnType::Default => true,
        syn::ReturnType::Type(_, ty) => !borrows(ty),
    }
}

fn borrows(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Reference(reference) => {
            !is_static(reference.lifetime.as_ref()) || borrows(&reference.elem)
        }
        syn::Type::ImplTrait(_) | syn::Type::TraitObject(_) | syn::Type::Infer(_) => true,
        syn::Type::Paren(paren) => borrows(&paren.elem),
        syn::Type::Group(group) => borrows(&group.elem),
        syn::Type::Array(array) => borrows(&array.elem),
        syn::Type::Tuple(tuple) => tuple.elems.iter().any(borrows),
        syn::Type::Path(path) => path.path.segments.iter().any(|segment| {
            let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
                return false;
            };

            args.args.iter().any(|arg| match arg {
                syn::GenericArgument::Lifetime(lifetime) => !is_static(Some(lifetime)),
                syn::GenericArgument::Type(ty) => borrows(ty),
                _ => false,
            })
        }),
        _ => false,
    }
}

fn is_static(lifetime: Option<&syn::Lifetime>) -> bool {
    lifetime
        .map(|lifetime| lifetime.ident == "static")
        .unwrap_or(false)
}
