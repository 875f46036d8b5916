use crate::{query::Query, scope::ScopeTable, value::Value};
use ulid::Ulid;

// ============================================================================
// MODEL KINDS
// ============================================================================
//
// These traits describe where a model lives and how it is queried,
// not what data it contains.
//

///
/// ScopeTarget
///
/// A model type scopes can be attached to.
/// `query` is the entry point every generated scope filters from.
///

pub trait ScopeTarget: Sized + 'static {
    const PATH: &'static str;

    #[must_use]
    fn query() -> Query<Self> {
        Query::new()
    }
}

///
/// ScopedTarget
///
/// A model with a type-level scope table, built once on first access.
/// Implemented by `#[derive(Scopes)]` and the build-step generator.
///

pub trait ScopedTarget: ScopeTarget {
    fn scope_table() -> &'static ScopeTable<Self>;
}

// ============================================================================
// FIELD ACCESS
// ============================================================================

///
/// FieldValues
///
/// Row-level field lookup used by in-memory query evaluation.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// FieldValue
///
/// Conversion of a single Rust value into a predicate literal.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for Ulid {
    fn to_value(&self) -> Value {
        Value::Ulid(*self)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

macro_rules! impl_field_value_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_field_value_copy!(bool, i8, i16, i32, i64, u8, u16, u32, u64);
