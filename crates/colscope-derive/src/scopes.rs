use colscope_build::ScopeImpl;
use colscope_core::scope::{ScopeConfig, ScopeSet};
use darling::{FromDeriveInput, util::PathList};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{DeriveInput, Error, Generics, Ident};

///
/// ScopesArgs
///
/// `#[scopes(names(..), prefix = "..", custom_target)]`
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(scopes))]
struct ScopesArgs {
    ident: Ident,
    generics: Generics,

    names: PathList,

    #[darling(default)]
    prefix: Option<String>,

    #[darling(default)]
    custom_target: bool,
}

// derive_scopes
pub fn derive_scopes(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let args = match ScopesArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(err) => return err.write_errors(),
    };

    match expand(&args) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(args: &ScopesArgs) -> Result<TokenStream, Error> {
    if !args.generics.params.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "Scopes cannot be derived for generic types",
        ));
    }

    let mut names = Vec::with_capacity(args.names.len());
    for path in args.names.iter() {
        let Some(ident) = path.get_ident() else {
            return Err(Error::new(
                Span::call_site(),
                "scope names must be plain identifiers",
            ));
        };
        names.push(ident.to_string());
    }

    // validated here so a bad list fails the build, never first use
    let config = args
        .prefix
        .as_ref()
        .map_or_else(ScopeConfig::default, ScopeConfig::new);
    let set = ScopeSet::with_config(&config, &names)
        .map_err(|err| Error::new(Span::call_site(), err))?;

    let ident = &args.ident;
    let ident_str = ident.to_string();

    ScopeImpl::new(
        quote!(#ident),
        quote!(concat!(module_path!(), "::", #ident_str)),
        &set,
    )
    .target_impl(!args.custom_target)
    .generate()
}
