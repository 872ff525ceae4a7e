//! Snapshot of the optimized inference settings file

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object passed through as loaded
pub type JsonObject = Map<String, Value>;

/// The `optimized_settings` object, kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSnapshot(JsonObject);

impl SettingsSnapshot {
    pub fn new(values: JsonObject) -> Self {
        Self(values)
    }

    /// Raw value of a setting, if present
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric value of a setting; missing or non-numeric settings read as 0
    pub fn number(&self, key: &str) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Display form of a setting, `None` when absent
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => "None".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<JsonObject> for SettingsSnapshot {
    fn from(values: JsonObject) -> Self {
        Self::new(values)
    }
}
