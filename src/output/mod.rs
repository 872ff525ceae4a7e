//! Output of the validation report: console text and the JSON file

mod formatter;

pub use formatter::{ConsoleFormatter, FormattingOptions};

use crate::{
    error::{ErrorContext, Result},
    models::Report,
};
use std::fs;
use std::path::Path;

/// Write the report as pretty-printed JSON, creating parent directories
///
/// Any existing file at `path` is replaced.
pub fn save_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("Failed to write report {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ConfigurationOutcome, IntegrationStatus, OptimizationOutcome, PerformanceResults,
        ValidationSummary,
    };
    use tempfile::TempDir;

    fn sample_report() -> Report {
        let configuration = ConfigurationOutcome::error("Config file not found");
        let optimization = OptimizationOutcome::Error { message: "Config file not found".to_string() };
        let performance = PerformanceResults::default();
        let integration = IntegrationStatus::default();
        let summary =
            ValidationSummary::derive(&performance, &configuration, &optimization, &integration, 100.0);

        Report {
            timestamp: Report::timestamp_now(),
            performance,
            configuration,
            integration,
            optimization,
            summary,
        }
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test_results").join("nested").join("report.json");

        save_report(&sample_report(), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["configuration"]["status"], "error");
        assert_eq!(written["optimization"]["message"], "Config file not found");
        assert_eq!(written["integration"]["api_available"], false);
        assert_eq!(written["performance"], serde_json::json!({}));
    }

    #[test]
    fn test_save_overwrites_and_indents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "stale content that is much longer than nothing").unwrap();

        save_report(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"timestamp\""));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_save_into_file_path_fails_with_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = save_report(&sample_report(), &blocker.join("report.json")).unwrap_err();
        assert_eq!(err.category(), "IO");
    }
}
