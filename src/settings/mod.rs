//! Loading and range-checking of the optimized inference settings file
//!
//! Both stages report failures as values rather than errors so that a
//! missing or broken file never stops the remaining stages.

pub mod ranges;

pub use ranges::check_ranges;

use crate::{
    error::{AppError, Result},
    models::{ConfigurationOutcome, OptimizationOutcome, SettingsSnapshot},
};
use serde_json::{Map, Value};
use std::path::Path;

/// Message reported when the settings file does not exist
pub const CONFIG_NOT_FOUND: &str = "Config file not found";

/// Read and parse the settings file, extracting `optimized_settings` and `hardware`
pub fn validate_configuration(path: &Path) -> ConfigurationOutcome {
    if !path.exists() {
        return ConfigurationOutcome::error(CONFIG_NOT_FOUND);
    }

    match load_document(path) {
        Ok((settings, hardware)) => ConfigurationOutcome::Success {
            settings,
            hardware,
            validated: true,
        },
        Err(e) => ConfigurationOutcome::error(e.to_string()),
    }
}

/// Reload the settings file and check every optimized setting against its range
pub fn validate_optimization_settings(path: &Path) -> OptimizationOutcome {
    match validate_configuration(path) {
        ConfigurationOutcome::Success { settings, .. } => {
            let validations = check_ranges(&settings);
            OptimizationOutcome::Success {
                all_valid: validations.all_valid(),
                settings,
                validations,
            }
        }
        ConfigurationOutcome::Error { message } => OptimizationOutcome::Error { message },
    }
}

fn load_document(path: &Path) -> Result<(SettingsSnapshot, Value)> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;

    let Value::Object(mut root) = document else {
        return Err(AppError::parse("expected a JSON object at the top level"));
    };

    let settings = match root.remove("optimized_settings") {
        None => SettingsSnapshot::default(),
        Some(Value::Object(values)) => SettingsSnapshot::new(values),
        Some(_) => return Err(AppError::validation("optimized_settings must be a JSON object")),
    };

    let hardware = root
        .remove("hardware")
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok((settings, hardware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("inference-optimized.json");

        let outcome = validate_configuration(&path);
        assert_eq!(outcome, ConfigurationOutcome::error(CONFIG_NOT_FOUND));

        let optimization = validate_optimization_settings(&path);
        assert_eq!(
            optimization,
            OptimizationOutcome::Error { message: CONFIG_NOT_FOUND.to_string() }
        );
        assert!(!optimization.all_valid());
    }

    #[test]
    fn test_malformed_json_reports_parser_message() {
        let file = write_config("{\"optimized_settings\": {");
        let outcome = validate_configuration(file.path());

        let message = outcome.message().unwrap();
        assert!(message.contains("JSON parse error"), "{}", message);

        // the range checker passes the same message through
        match validate_optimization_settings(file.path()) {
            OptimizationOutcome::Error { message: propagated } => assert_eq!(propagated, message),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_document() {
        let file = write_config("[1, 2, 3]");
        assert!(!validate_configuration(file.path()).is_success());

        let file = write_config(r#"{"optimized_settings": [1, 2]}"#);
        let outcome = validate_configuration(file.path());
        assert!(outcome.message().unwrap().contains("optimized_settings"));
    }

    #[test]
    fn test_settings_and_hardware_extracted() {
        let file = write_config(
            &json!({
                "optimized_settings": {"temperature": 0.7, "context_length": 4096},
                "hardware": {"cpu": "Apple M2", "ram_gb": 16},
                "notes": "ignored"
            })
            .to_string(),
        );

        match validate_configuration(file.path()) {
            ConfigurationOutcome::Success { settings, hardware, validated } => {
                assert!(validated);
                assert_eq!(settings.number("temperature"), 0.7);
                assert_eq!(settings.number("context_length"), 4096.0);
                assert_eq!(hardware, json!({"cpu": "Apple M2", "ram_gb": 16}));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_yields_empty_sections() {
        let file = write_config("{}");
        match validate_configuration(file.path()) {
            ConfigurationOutcome::Success { settings, hardware, .. } => {
                assert!(settings.is_empty());
                assert_eq!(hardware, json!({}));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_configuration_is_fully_valid() {
        let file = write_config(
            r#"{"optimized_settings": {"temperature": 0.7, "max_tokens": 512, "top_p": 0.9, "top_k": 40, "repeat_penalty": 1.1, "num_threads": 8}}"#,
        );

        match validate_optimization_settings(file.path()) {
            OptimizationOutcome::Success { validations, all_valid, .. } => {
                assert!(all_valid);
                assert!(validations.entries().iter().all(|(_, valid)| *valid));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_fail_except_temperature() {
        let file = write_config(r#"{"optimized_settings": {}}"#);

        match validate_optimization_settings(file.path()) {
            OptimizationOutcome::Success { validations, all_valid, .. } => {
                assert!(!all_valid);
                assert!(validations.temperature);
                assert!(!validations.max_tokens);
                assert!(!validations.top_p);
                assert!(!validations.top_k);
                assert!(!validations.repeat_penalty);
                assert!(!validations.num_threads);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }
}
