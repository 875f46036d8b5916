use colscope_core::scope::ScopeSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, parse_str};

///
/// ScopeImpl
///
/// Emits the associated scope functions, the `ScopedTarget` table, and
/// (optionally) a default `ScopeTarget` impl for one model type.
/// Shared by the derive macro and the build-step generator.
///

pub struct ScopeImpl<'a> {
    ty: TokenStream,
    path: TokenStream,
    set: &'a ScopeSet,
    target_impl: bool,
}

impl<'a> ScopeImpl<'a> {
    /// `ty` is the model type; `path` is an expression evaluating to its
    /// `&'static str` entity path.
    #[must_use]
    pub const fn new(ty: TokenStream, path: TokenStream, set: &'a ScopeSet) -> Self {
        Self {
            ty,
            path,
            set,
            target_impl: true,
        }
    }

    /// Skip the `ScopeTarget` impl when the model supplies its own.
    #[must_use]
    pub const fn target_impl(mut self, enabled: bool) -> Self {
        self.target_impl = enabled;
        self
    }

    /// Generate every impl block for the model.
    ///
    /// Fails only when a scope name is not a usable Rust identifier.
    pub fn generate(&self) -> Result<TokenStream, syn::Error> {
        let mut tokens = quote!();

        if self.target_impl {
            tokens.extend(self.target_tokens());
        }
        tokens.extend(self.function_tokens()?);
        tokens.extend(self.table_tokens());

        Ok(tokens)
    }

    // target_tokens
    fn target_tokens(&self) -> TokenStream {
        let ty = &self.ty;
        let path = &self.path;

        quote! {
            impl ::colscope::traits::ScopeTarget for #ty {
                const PATH: &'static str = #path;
            }
        }
    }

    // function_tokens
    // one associated function per scope, all routed through apply_scope
    fn function_tokens(&self) -> Result<TokenStream, syn::Error> {
        let ty = &self.ty;

        let fns = self
            .set
            .iter()
            .map(|spec| {
                let scope = spec.scope_name();
                let column = spec.column_name();
                let ident = scope_ident(scope)?;
                let doc = format!("Filter on `{column} = value`.");

                Ok(quote! {
                    #[doc = #doc]
                    #[must_use]
                    pub fn #ident(
                        value: impl ::colscope::traits::FieldValue,
                    ) -> ::colscope::query::Query<Self> {
                        ::colscope::scope::apply_scope::<Self>(#scope, #column, value)
                    }
                })
            })
            .collect::<Result<Vec<_>, syn::Error>>()?;

        Ok(quote! {
            impl #ty {
                #(#fns)*
            }
        })
    }

    // table_tokens
    // per-type table, built on first access
    fn table_tokens(&self) -> TokenStream {
        let ty = &self.ty;
        let pairs = self.set.iter().map(|spec| {
            let scope = spec.scope_name();
            let column = spec.column_name();

            quote!((#scope, #column))
        });

        quote! {
            impl ::colscope::traits::ScopedTarget for #ty {
                fn scope_table() -> &'static ::colscope::scope::ScopeTable<Self> {
                    static TABLE: ::std::sync::OnceLock<::colscope::scope::ScopeTable<#ty>> =
                        ::std::sync::OnceLock::new();

                    TABLE.get_or_init(|| {
                        let mut table = ::colscope::scope::ScopeTable::new();
                        ::colscope::scope::ScopeSet::from_validated(&[#(#pairs),*])
                            .attach(&mut table);

                        table
                    })
                }
            }
        }
    }
}

fn scope_ident(scope: &str) -> Result<Ident, syn::Error> {
    parse_str::<Ident>(scope).map_err(|_| {
        syn::Error::new(
            Span::call_site(),
            format!("scope `{scope}` is not a valid Rust identifier"),
        )
    })
}
