/// Parsed passthrough attribute
pub struct Attr {
    /// Path to simplemock, e.g. `::simplemock`
    pub prefix: syn::Path,
    /// Whether to also implement `Attach`
    pub attach: bool,
    pub debug: bool,
}

impl syn::parse::Parse for Attr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut prefix: Option<syn::Path> = None;
        let mut attach = true;
        let mut debug = false;

        while !input.is_empty() {
            let keyword: syn::Ident = input.parse()?;
            let _: syn::token::Eq = input.parse()?;
            match keyword.to_string().as_str() {
                "prefix" => {
                    prefix = Some(input.parse()?);
                }
                "attach" => {
                    attach = input.parse::<syn::LitBool>()?.value;
                }
                "debug" => {
                    debug = input.parse::<syn::LitBool>()?.value;
                }
                _ => return Err(syn::Error::new(keyword.span(), "Unrecognized keyword")),
            };

            if input.peek(syn::token::Comma) {
                let _: syn::token::Comma = input.parse()?;
            } else {
                break;
            }
        }

        if !input.is_empty() {
            return Err(input.error("Expected `,`"));
        }

        Ok(Self {
            prefix: prefix.unwrap_or_else(|| syn::parse_quote! { ::simplemock }),
            attach,
            debug,
        })
    }
}
