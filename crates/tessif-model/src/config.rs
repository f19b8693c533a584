//! Run and model configuration mappings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Open-ended options forwarded verbatim to a model's run operation.
///
/// There is no recognized-option enumeration: keys mean whatever the
/// backend says they mean, and adapters never inspect them.
pub type RunOptions = BTreeMap<String, Value>;

/// Key-value run configuration consulted by the external run operation.
///
/// Values are arbitrary JSON. Keys are kept in order, so merging and
/// serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunConfig(BTreeMap<String, Value>);

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single key, overwriting any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Merge `entries` into this configuration, last write wins per key.
    /// Keys not named in `entries` are left untouched.
    pub fn update(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in entries {
            self.0.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for RunConfig {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Model metadata. `name` namespaces exported result tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    /// Backend-specific metadata carried alongside the name.
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, Value>,
}

impl ModelConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_overwrites_existing_value() {
        let mut config = RunConfig::new();
        config.set("solver", "cbc");
        config.set("solver", "glpk");
        assert_eq!(config.get("solver"), Some(&json!("glpk")));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn update_preserves_unnamed_keys() {
        let mut config = RunConfig::new();
        config.set("backend", "pyomo");
        config.set("solver", "cbc");

        config.update([("solver".to_string(), json!("glpk"))]);

        assert_eq!(config.get("solver"), Some(&json!("glpk")));
        assert_eq!(config.get("backend"), Some(&json!("pyomo")));
    }

    #[test]
    fn run_config_serializes_as_plain_map() {
        let mut config = RunConfig::new();
        config.set("solver", "cbc");
        config.set("zero_threshold", 1e-10);

        let text = serde_json::to_string(&config).unwrap();
        let parsed: RunConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
        assert!(text.starts_with('{'));
    }

    #[test]
    fn model_config_flattens_extra_entries() {
        let parsed: ModelConfig = serde_json::from_str(
            r#"{"name": "baseline", "calliope_version": "0.6.6-post1", "timeseries": true}"#,
        )
        .unwrap();

        assert_eq!(parsed.name, "baseline");
        assert_eq!(
            parsed.extra.get("calliope_version"),
            Some(&json!("0.6.6-post1"))
        );

        let text = serde_json::to_string(&parsed).unwrap();
        let reparsed: ModelConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, parsed);
    }
}
