//! Build-step scope generator.
//!
//! Reads a declarative TOML list of scope names per model, validates each
//! list exactly like `ScopeSet::new` does at runtime, and emits statically
//! typed scope functions for `include!`-ing from `OUT_DIR`.

pub mod codegen;
mod config;
mod error;
mod macros;

#[cfg(test)]
mod tests;

pub use codegen::ScopeImpl;
pub use config::{ModelScopes, ScopesConfig};
pub use error::BuildError;

use colscope_core::scope::ScopeSet;
use proc_macro2::TokenStream;
use quote::quote;
use std::path::Path;

/// Generate scope code for every model in the config file at `path`.
pub fn generate_from_path(path: impl AsRef<Path>) -> Result<String, BuildError> {
    let config = ScopesConfig::from_path(path)?;

    generate(&config)
}

/// Generate scope code for every model in `config`, as source text.
pub fn generate(config: &ScopesConfig) -> Result<String, BuildError> {
    generate_tokens(config).map(|tokens| tokens.to_string())
}

/// Generate scope code for every model in `config`.
///
/// Models are emitted in path order; the first invalid model aborts
/// generation.
pub fn generate_tokens(config: &ScopesConfig) -> Result<TokenStream, BuildError> {
    let mut tokens = quote!();

    for (model, scopes) in &config.models {
        let ty = syn::parse_str::<syn::Path>(model).map_err(|_| BuildError::InvalidModelPath {
            model: model.clone(),
        })?;

        let set = ScopeSet::with_config(&config.scope_config(scopes), &scopes.scopes).map_err(
            |source| BuildError::Scope {
                model: model.clone(),
                source,
            },
        )?;

        let generated = ScopeImpl::new(quote!(#ty), quote!(#model), &set)
            .target_impl(!scopes.custom_target)
            .generate()
            .map_err(|source| BuildError::Codegen {
                model: model.clone(),
                source,
            })?;

        tokens.extend(generated);
    }

    Ok(tokens)
}
