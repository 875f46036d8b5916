//! Module: scope
//! Responsibility: derive and validate scope-name → column mappings, and
//! install them as equality-filter operations on a model's scope table.
//! Does not own: query semantics (see `query`) or code generation.
//!
//! A `ScopeSet` is built once from a declarative list of names and consumed
//! once by `attach`. Construction is the only failure point.

mod table;


use crate::{
    DEFAULT_SCOPE_PREFIX,
    error::{BadScope, ScopeError},
    obs::sink::{self, MetricsEvent},
    traits::ScopeTarget,
    value::Value,
};

// re-exports
pub use table::{AttachReport, Scope, ScopeFn, ScopeTable, apply_scope};

///
/// ScopeConfig
///
/// Naming rules shared by every scope set built from it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScopeConfig {
    prefix: String,
}

impl ScopeConfig {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Strip the prefix from the start of `scope_name`.
    /// Returns the name unchanged when the prefix is absent.
    #[must_use]
    pub fn derive_column<'a>(&self, scope_name: &'a str) -> &'a str {
        scope_name
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(scope_name)
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCOPE_PREFIX)
    }
}

///
/// ScopeSpec
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScopeSpec {
    scope_name: String,
    column_name: String,
}

impl ScopeSpec {
    #[must_use]
    pub fn derive(config: &ScopeConfig, scope_name: &str) -> Self {
        Self {
            scope_name: scope_name.to_string(),
            column_name: config.derive_column(scope_name).to_string(),
        }
    }

    #[must_use]
    pub fn scope_name(&self) -> &str {
        &self.scope_name
    }

    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// A spec is valid when stripping actually removed a non-empty prefix
    /// and left a non-empty column behind.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.column_name.is_empty() && self.column_name != self.scope_name
    }
}

impl From<&ScopeSpec> for BadScope {
    fn from(spec: &ScopeSpec) -> Self {
        Self {
            scope_name: spec.scope_name.clone(),
            column_name: spec.column_name.clone(),
        }
    }
}

///
/// ScopeSet
///
/// Ordered, validated scope-name → column mapping.
/// Repeated names keep their first position and take the last definition.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScopeSet {
    specs: Vec<ScopeSpec>,
}

impl ScopeSet {
    /// Build a set using the default `for_` prefix.
    pub fn new<I, S>(scope_names: I) -> Result<Self, ScopeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(&ScopeConfig::default(), scope_names)
    }

    /// Build a set, failing with every offending name when any scope does
    /// not carry the configured prefix.
    pub fn with_config<I, S>(config: &ScopeConfig, scope_names: I) -> Result<Self, ScopeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut specs: Vec<ScopeSpec> = Vec::new();
        let mut duplicates = 0_u64;

        for name in scope_names {
            let spec = ScopeSpec::derive(config, name.as_ref());

            if let Some(existing) = specs
                .iter_mut()
                .find(|existing| existing.scope_name == spec.scope_name)
            {
                *existing = spec;
                duplicates += 1;
            } else {
                specs.push(spec);
            }
        }

        let bad: Vec<BadScope> = specs
            .iter()
            .filter(|spec| !spec.is_valid())
            .map(BadScope::from)
            .collect();

        if !bad.is_empty() {
            sink::record(MetricsEvent::SetRejected {
                bad_scopes: bad.len() as u64,
            });

            return Err(ScopeError::InvalidScopeConfiguration {
                prefix: config.prefix().to_string(),
                bad,
            });
        }

        sink::record(MetricsEvent::SetBuilt {
            scopes: specs.len() as u64,
            duplicates,
        });

        Ok(Self { specs })
    }

    /// Rebuild a set from pairs that were validated when code was generated.
    #[doc(hidden)]
    #[must_use]
    pub fn from_validated(pairs: &[(&str, &str)]) -> Self {
        let specs = pairs
            .iter()
            .map(|(scope_name, column_name)| ScopeSpec {
                scope_name: (*scope_name).to_string(),
                column_name: (*column_name).to_string(),
            })
            .collect();

        Self { specs }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScopeSpec> {
        self.specs.iter()
    }

    /// Column derived for `scope_name`, if the set declares it.
    #[must_use]
    pub fn column(&self, scope_name: &str) -> Option<&str> {
        self.specs
            .iter()
            .find(|spec| spec.scope_name == scope_name)
            .map(ScopeSpec::column_name)
    }

    /// Install one equality-filter scope per entry on `table`.
    ///
    /// Generated scopes replace any same-named scope already on the table;
    /// the report lists which names did so.
    pub fn attach<E: ScopeTarget>(self, table: &mut ScopeTable<E>) -> AttachReport {
        let mut report = AttachReport {
            entity_path: E::PATH,
            installed: Vec::with_capacity(self.specs.len()),
            overridden: Vec::new(),
        };

        for ScopeSpec {
            scope_name,
            column_name,
        } in self.specs
        {
            let name = scope_name.clone();
            let column = column_name.clone();
            let handler: ScopeFn<E> =
                Box::new(move |value: Value| apply_scope::<E>(&name, &column, value));

            if table.install(Scope::generated(scope_name.clone(), column_name, handler)) {
                report.overridden.push(scope_name.clone());
            }
            report.installed.push(scope_name);
        }

        sink::record(MetricsEvent::Attached {
            entity_path: E::PATH,
            installed: report.installed.len() as u64,
            overridden: report.overridden.len() as u64,
        });

        report
    }
}

impl<'a> IntoIterator for &'a ScopeSet {
    type Item = &'a ScopeSpec;
    type IntoIter = std::slice::Iter<'a, ScopeSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
