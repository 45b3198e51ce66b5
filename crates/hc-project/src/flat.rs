//! The persisted flat map: `"Section_Field" -> number | string`.
//!
//! The GUI stores every entry field under its section-prefixed name and
//! falls back to a string when the text is not a number. Two extra
//! entries carry the multi-fuel selection.

use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
    Table(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Numbers, and text that parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(v) => Some(*v),
            ConfigValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfigValue::Number(v) => v.to_string(),
            ConfigValue::Text(s) => format!("'{s}'"),
            ConfigValue::List(items) => format!("list of {}", items.len()),
            ConfigValue::Table(entries) => format!("table of {}", entries.len()),
        }
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Number(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::List(items)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatConfig {
    entries: BTreeMap<String, ConfigValue>,
}

impl FlatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.entries.iter()
    }

    /// Number under `key`, if present. Empty text counts as absent.
    pub fn number(&self, key: &str) -> Result<Option<f64>, ValidationError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(ConfigValue::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(value) => match value.as_number() {
                Some(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(ValidationError::NotANumber {
                    key: key.to_string(),
                    value: value.describe(),
                }),
            },
        }
    }

    pub fn require_number(&self, key: &str) -> Result<f64, ValidationError> {
        self.number(key)?.ok_or_else(|| ValidationError::Missing {
            key: key.to_string(),
        })
    }

    /// Positive integer under `key`, if present.
    pub fn count(&self, key: &str) -> Result<Option<usize>, ValidationError> {
        match self.number(key)? {
            None => Ok(None),
            Some(v) if v >= 1.0 && v.fract() == 0.0 => Ok(Some(v as usize)),
            Some(v) => Err(ValidationError::InvalidValue {
                key: key.to_string(),
                value: v.to_string(),
                reason: "expected a positive integer".to_string(),
            }),
        }
    }

    /// Trimmed non-empty text under `key`, if present. Numbers are rendered.
    pub fn text(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(ConfigValue::Text(s)) => {
                let s = s.trim();
                Ok((!s.is_empty()).then(|| s.to_string()))
            }
            Some(ConfigValue::Number(v)) => Ok(Some(v.to_string())),
            Some(other) => Err(ValidationError::InvalidValue {
                key: key.to_string(),
                value: other.describe(),
                reason: "expected text".to_string(),
            }),
        }
    }

    pub fn list(&self, key: &str) -> Result<Option<&[String]>, ValidationError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(ConfigValue::List(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(ValidationError::InvalidValue {
                key: key.to_string(),
                value: other.describe(),
                reason: "expected a list of names".to_string(),
            }),
        }
    }

    pub fn table(&self, key: &str) -> Result<Option<&BTreeMap<String, ConfigValue>>, ValidationError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(ConfigValue::Table(entries)) => Ok(Some(entries)),
            Some(other) => Err(ValidationError::InvalidValue {
                key: key.to_string(),
                value: other.describe(),
                reason: "expected a table".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_values_deserialize() {
        let json = r#"{
            "Optimization_ptank": 5500000,
            "Nozzle_epsilon": "adapt",
            "Injector_CD": "0.8",
            "selected_fuels": ["paraffin", "HTPB"],
            "fuel_weight_entries": {"paraffin": "70", "HTPB": 30}
        }"#;
        let config: FlatConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.number("Optimization_ptank").unwrap(), Some(55e5));
        assert_eq!(config.text("Nozzle_epsilon").unwrap().as_deref(), Some("adapt"));
        assert_eq!(config.number("Injector_CD").unwrap(), Some(0.8));
        assert_eq!(config.list("selected_fuels").unwrap().map(|l| l.len()), Some(2));
        let weights = config.table("fuel_weight_entries").unwrap().unwrap();
        assert_eq!(weights["paraffin"].as_number(), Some(70.0));
        assert_eq!(weights["HTPB"].as_number(), Some(30.0));
    }

    #[test]
    fn accessor_errors_name_the_key() {
        let config = FlatConfig::new()
            .with("Injector_CD", "wide")
            .with("Optimization_parameter_points", 2.5)
            .with("Fuel & Oxidiser_Fuel_Temperature", "  ");

        assert_eq!(
            config.number("Injector_CD"),
            Err(ValidationError::NotANumber {
                key: "Injector_CD".to_string(),
                value: "'wide'".to_string(),
            })
        );
        assert!(matches!(
            config.count("Optimization_parameter_points"),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert_eq!(config.number("Fuel & Oxidiser_Fuel_Temperature").unwrap(), None);
        assert_eq!(
            config.require_number("Optimization_ptank"),
            Err(ValidationError::Missing {
                key: "Optimization_ptank".to_string(),
            })
        );
    }
}
