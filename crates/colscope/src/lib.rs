//! ## Crate layout
//! - `build`: build-step generator that turns a TOML scope list into code.
//! - `core`: values, predicates, queries, scope sets, tables, and observability.
//! - `macros`: `#[derive(Scopes)]` and `#[derive(FieldValues)]`.
//!
//! Generated code refers to items through this crate (`::colscope::scope`,
//! `::colscope::query`, ...), so models only need `colscope` in Cargo.toml.

pub use colscope_build as build;
pub use colscope_core as core;
pub use colscope_derive as macros;

// generated code paths
pub use colscope_core::{error, obs, predicate, query, scope, traits, value};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use colscope_core::{DEFAULT_SCOPE_PREFIX, ScopeError};

//
// Macros
//

pub use colscope_build::build;

/// Include the scope module emitted by `build!` (placed in `OUT_DIR/scopes.rs`).
#[macro_export]
macro_rules! include_scopes {
    () => {
        include!(concat!(env!("OUT_DIR"), "/scopes.rs"));
    };
}

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        core::{
            predicate::{FieldRef, Predicate},
            query::Query,
            scope::{ScopeConfig, ScopeSet, ScopeTable},
            traits::{FieldValue as _, FieldValues, ScopeTarget, ScopedTarget},
            value::Value,
        },
        macros::{FieldValues, Scopes},
    };
}
