//! Module: query
//! Responsibility: chainable, entity-typed filter intent.
//! Does not own: scope validation or storage access.
//! Boundary: the result type every generated scope returns.

#[cfg(test)]
mod tests;

use crate::{
    predicate::{ComparePredicate, Predicate},
    traits::{FieldValue, FieldValues, ScopeTarget},
};
use std::{fmt, marker::PhantomData};

///
/// Query
///
/// Conjunction of predicates over entity `E`, plus an optional row limit.
/// Every builder method consumes and returns the query so calls chain.
///

pub struct Query<E> {
    predicates: Vec<Predicate>,
    limit: Option<u32>,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Query<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            predicates: Vec::new(),
            limit: None,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn filter(mut self, predicate: impl Into<Predicate>) -> Self {
        self.predicates.push(predicate.into());
        self
    }

    /// Restrict `column` to equal `value`.
    #[must_use]
    pub fn filter_eq(self, column: impl Into<String>, value: impl FieldValue) -> Self {
        self.filter(ComparePredicate::eq(column, value.to_value()))
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// The whole filter as one predicate (`True` when unfiltered).
    #[must_use]
    pub fn predicate(&self) -> Predicate {
        Predicate::and(self.predicates.iter().cloned())
    }

    #[must_use]
    pub const fn max_rows(&self) -> Option<u32> {
        self.limit
    }

    /// Evaluate the query against in-memory rows, preserving input order.
    pub fn evaluate<'a, I>(&self, rows: I) -> Vec<&'a E>
    where
        I: IntoIterator<Item = &'a E>,
        E: FieldValues + 'a,
    {
        let predicate = self.predicate();
        let limit = self
            .limit
            .map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

        rows.into_iter()
            .filter(|row| predicate.eval(*row))
            .take(limit)
            .collect()
    }
}

impl<E: ScopeTarget> Query<E> {
    #[must_use]
    pub const fn entity_path(&self) -> &'static str {
        E::PATH
    }
}

impl<E> Default for Query<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Query<E> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            limit: self.limit,
            _marker: PhantomData,
        }
    }
}

impl<E> PartialEq for Query<E> {
    fn eq(&self, other: &Self) -> bool {
        self.predicates == other.predicates && self.limit == other.limit
    }
}

impl<E> Eq for Query<E> {}

impl<E> fmt::Debug for Query<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("predicates", &self.predicates)
            .field("limit", &self.limit)
            .finish()
    }
}

impl<E> fmt::Display for Query<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHERE {}", self.predicate())?;
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }

        Ok(())
    }
}
