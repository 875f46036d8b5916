//! Module: predicate
//! Responsibility: equality predicate model, field-level builders, row evaluation.
//! Does not own: query chaining or scope dispatch.

#[cfg(test)]
mod tests;

use crate::{
    traits::{FieldValue, FieldValues},
    value::Value,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    #[display("=")]
    Eq,
    #[display("!=")]
    Ne,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: CompareOp::Eq,
            value,
        }
    }

    /// Missing fields never match, for either operator.
    pub fn eval<R: FieldValues + ?Sized>(&self, row: &R) -> bool {
        let Some(actual) = row.get_value(&self.field) else {
            return false;
        };

        match self.op {
            CompareOp::Eq => actual.compare_eq(&self.value),
            CompareOp::Ne => !actual.compare_eq(&self.value),
        }
    }
}

impl fmt::Display for ComparePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Predicate {
    True,
    And(Vec<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    /// Conjunction of `predicates`.
    ///
    /// Nested conjunctions are flattened and `True` terms dropped; an empty
    /// conjunction is `True` and a single term is returned as-is.
    #[must_use]
    pub fn and(predicates: impl IntoIterator<Item = Self>) -> Self {
        let mut terms = Vec::new();
        for predicate in predicates {
            match predicate {
                Self::True => {}
                Self::And(inner) => terms.extend(inner),
                other => terms.push(other),
            }
        }

        match terms.len() {
            0 => Self::True,
            1 => terms.remove(0),
            _ => Self::And(terms),
        }
    }

    pub fn eval<R: FieldValues + ?Sized>(&self, row: &R) -> bool {
        match self {
            Self::True => true,
            Self::And(terms) => terms.iter().all(|term| term.eval(row)),
            Self::Compare(cmp) => cmp.eval(row),
        }
    }
}

impl From<ComparePredicate> for Predicate {
    fn from(cmp: ComparePredicate) -> Self {
        Self::Compare(cmp)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("TRUE"),
            Self::And(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    write!(f, "{term}")?;
                }
                Ok(())
            }
            Self::Compare(cmp) => write!(f, "{cmp}"),
        }
    }
}

///
/// FieldRef
///
/// Zero-cost wrapper around a static field name used in predicates.
/// Enables method-based predicate builders without allocating the name
/// until a predicate is produced.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldRef(&'static str);

impl FieldRef {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Strict equality comparison.
    #[must_use]
    pub fn eq(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Eq, value.to_value())
    }

    /// Strict inequality comparison.
    #[must_use]
    pub fn ne(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Ne, value.to_value())
    }
}

fn compare(field: &str, op: CompareOp, value: Value) -> Predicate {
    Predicate::Compare(ComparePredicate {
        field: field.to_string(),
        op,
        value,
    })
}
