use crate::BuildError;
use colscope_core::scope::ScopeConfig;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

///
/// ScopesConfig
///
/// Declarative scope list, one table per model type path:
///
/// ```toml
/// prefix = "for_"
///
/// [models."crate::model::Listing"]
/// scopes = ["for_seller_id", "for_status"]
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScopesConfig {
    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub models: BTreeMap<String, ModelScopes>,
}

impl ScopesConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, BuildError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Naming rules for `model`: its own prefix, else the file prefix,
    /// else the default.
    #[must_use]
    pub fn scope_config(&self, model: &ModelScopes) -> ScopeConfig {
        model
            .prefix
            .as_ref()
            .or(self.prefix.as_ref())
            .map_or_else(ScopeConfig::default, ScopeConfig::new)
    }
}

///
/// ModelScopes
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelScopes {
    pub scopes: Vec<String>,

    #[serde(default)]
    pub prefix: Option<String>,

    /// The model implements `ScopeTarget` itself.
    #[serde(default)]
    pub custom_target: bool,
}
