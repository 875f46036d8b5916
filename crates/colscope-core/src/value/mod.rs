
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

///
/// Value
/// can be used in WHERE statements
///
/// Null → the field's value is Option::None (i.e., SQL NULL).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Equality used by predicate evaluation.
    ///
    /// Signed and unsigned integers compare by numeric value so a scope
    /// called with `42` matches a `u64` column holding `42`. Every other
    /// pairing is strict.
    #[must_use]
    pub fn compare_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Uint(b)) | (Self::Uint(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.compare_eq(y))
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("NULL"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Ulid(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(
    bool => Bool,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    String => Text,
    &str => Text,
    Ulid => Ulid,
);

// Non-negative signed integers land in `Uint` so `42` and `42_u64` build
// the same literal; `From` only builds `Int` for negative numbers.
macro_rules! impl_from_signed_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    let wide = i64::from(v);
                    u64::try_from(wide).map_or(Self::Int(wide), Self::Uint)
                }
            }
        )*
    };
}

impl_from_signed_for_value!(i8, i16, i32, i64);
