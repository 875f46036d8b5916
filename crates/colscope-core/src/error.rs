use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ScopeError
///
/// Construction-time failure for a scope set.
/// Always surfaced to the caller; there is no recovery path inside the builder.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ScopeError {
    #[error(
        "invalid scope configuration: scopes must be named like `{prefix}<column_name>`, but got {}",
        BadScopeList(.bad)
    )]
    InvalidScopeConfiguration { prefix: String, bad: Vec<BadScope> },
}

impl ScopeError {
    /// Every offending scope, in the order it was requested.
    #[must_use]
    pub fn bad_scopes(&self) -> &[BadScope] {
        match self {
            Self::InvalidScopeConfiguration { bad, .. } => bad,
        }
    }

    /// The prefix the offending names were checked against.
    #[must_use]
    pub fn prefix(&self) -> &str {
        match self {
            Self::InvalidScopeConfiguration { prefix, .. } => prefix,
        }
    }
}

///
/// BadScope
///
/// A requested scope name paired with the column it derived to.
/// The column is either the unchanged name (prefix absent) or empty.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BadScope {
    pub scope_name: String,
    pub column_name: String,
}

impl fmt::Display for BadScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} => {:?}", self.scope_name, self.column_name)
    }
}

// BadScopeList
// renders a comma separated list for the error message
struct BadScopeList<'a>(&'a [BadScope]);

impl fmt::Display for BadScopeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bad) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{bad}")?;
        }

        Ok(())
    }
}
