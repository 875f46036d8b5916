use crate::{
    obs::sink::{self, MetricsEvent},
    query::Query,
    traits::{FieldValue, ScopeTarget},
    value::Value,
};
use std::fmt;

///
/// ScopeFn
///
/// Type-erased scope body. Shared across threads so tables can live in
/// per-type statics.
///

pub type ScopeFn<E> = Box<dyn Fn(Value) -> Query<E> + Send + Sync>;

/// Apply one equality scope to `E`'s query entry point.
///
/// Every generated scope, whether installed on a table or emitted as an
/// associated function, routes through here.
pub fn apply_scope<E: ScopeTarget>(
    scope_name: &str,
    column_name: &str,
    value: impl FieldValue,
) -> Query<E> {
    sink::record(MetricsEvent::ScopeCalled {
        entity_path: E::PATH,
        scope: scope_name,
    });

    E::query().filter_eq(column_name, value)
}

///
/// Scope
///
/// One named operation on a scope table.
/// `column` is set only for scopes generated from a `ScopeSet`.
///

pub struct Scope<E> {
    name: String,
    column: Option<String>,
    handler: ScopeFn<E>,
}

impl<E> Scope<E> {
    pub(crate) fn generated(name: String, column: String, handler: ScopeFn<E>) -> Self {
        Self {
            name,
            column: Some(column),
            handler,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.column.is_some()
    }

    #[must_use]
    pub fn call(&self, value: impl FieldValue) -> Query<E> {
        (self.handler)(value.to_value())
    }
}

impl<E> fmt::Debug for Scope<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.name)
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}

///
/// ScopeTable
///
/// Type-level operation table for `E`, in installation order.
/// Installing a name that already exists replaces it in place.
///

pub struct ScopeTable<E> {
    scopes: Vec<Scope<E>>,
}

impl<E> ScopeTable<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Define a hand-written scope. Returns `true` when it replaced one.
    pub fn define<F>(&mut self, name: impl Into<String>, handler: F) -> bool
    where
        F: Fn(Value) -> Query<E> + Send + Sync + 'static,
    {
        self.install(Scope {
            name: name.into(),
            column: None,
            handler: Box::new(handler),
        })
    }

    pub(crate) fn install(&mut self, scope: Scope<E>) -> bool {
        if let Some(slot) = self.scopes.iter_mut().find(|s| s.name == scope.name) {
            *slot = scope;
            true
        } else {
            self.scopes.push(scope);
            false
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scope<E>> {
        self.scopes.iter().find(|scope| scope.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Invoke the scope called `name`, if the table has one.
    #[must_use]
    pub fn call(&self, name: &str, value: impl FieldValue) -> Option<Query<E>> {
        self.get(name).map(|scope| scope.call(value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(|scope| scope.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scope<E>> {
        self.scopes.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<E> Default for ScopeTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ScopeTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.scopes).finish()
    }
}

///
/// AttachReport
///
/// What an attachment did to a table.
/// `overridden` is a subset of `installed`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttachReport {
    pub entity_path: &'static str,
    pub installed: Vec<String>,
    pub overridden: Vec<String>,
}
