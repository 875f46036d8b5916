use colscope_core::ScopeError;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("failed to read scope config {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid scope config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("model `{model}` is not a valid Rust type path")]
    InvalidModelPath { model: String },

    #[error("model `{model}`: {source}")]
    Scope { model: String, source: ScopeError },

    #[error("model `{model}`: {source}")]
    Codegen { model: String, source: syn::Error },
}
