//! Core runtime for colscope: values, predicates, the chainable query
//! collaborator, validated scope sets, per-type scope tables, and the
//! observability sink.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod obs;
pub mod predicate;
pub mod query;
pub mod scope;
pub mod traits;
pub mod value;

pub use error::ScopeError;

///
/// CONSTANTS
///

/// Prefix every scope name must carry unless a `ScopeConfig` overrides it.
pub const DEFAULT_SCOPE_PREFIX: &str = "for_";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or tables are re-exported here.
///

pub mod prelude {
    pub use crate::{
        predicate::{FieldRef, Predicate},
        query::Query,
        traits::{FieldValue, FieldValues, ScopeTarget, ScopedTarget},
        value::Value,
    };
}
