//! The simplemock procedural macros.

#![forbid(unsafe_code)]

mod passthrough;

extern crate proc_macro;

///
/// The `passthrough` attribute macro.
/// Re-exported by `simplemock`, it is documented there.
///
#[proc_macro_attribute]
pub fn passthrough(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = syn::parse_macro_input!(attr as passthrough::Attr);
    let item_impl = syn::parse_macro_input!(input as syn::ItemImpl);

    let output = match passthrough::generate(attr, item_impl) {
        Ok(stream) => stream,
        Err(err) => err.to_compile_error(),
    };

    proc_macro::TokenStream::from(output)
}
