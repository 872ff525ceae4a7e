//! Stage outcomes and the aggregated validation report

use super::metrics::LatencyStatistics;
use super::settings::SettingsSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of loading the optimized settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConfigurationOutcome {
    /// File parsed; settings and hardware are passed through unvalidated
    Success {
        settings: SettingsSnapshot,
        hardware: Value,
        validated: bool,
    },
    /// File missing or unreadable
    Error { message: String },
}

impl ConfigurationOutcome {
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self::Error { message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn settings(&self) -> Option<&SettingsSnapshot> {
        match self {
            Self::Success { settings, .. } => Some(settings),
            Self::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}

/// Range check of each optimized setting, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingValidations {
    pub temperature: bool,
    pub max_tokens: bool,
    pub top_p: bool,
    pub top_k: bool,
    pub repeat_penalty: bool,
    pub num_threads: bool,
}

impl SettingValidations {
    /// Setting name and check result pairs
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("temperature", self.temperature),
            ("max_tokens", self.max_tokens),
            ("top_p", self.top_p),
            ("top_k", self.top_k),
            ("repeat_penalty", self.repeat_penalty),
            ("num_threads", self.num_threads),
        ]
    }

    pub fn all_valid(&self) -> bool {
        self.entries().iter().all(|(_, valid)| *valid)
    }
}

/// Result of range-checking the optimized settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OptimizationOutcome {
    Success {
        settings: SettingsSnapshot,
        validations: SettingValidations,
        all_valid: bool,
    },
    /// The settings file could not be loaded; carries the loader's message
    Error { message: String },
}

impl OptimizationOutcome {
    pub fn all_valid(&self) -> bool {
        match self {
            Self::Success { all_valid, .. } => *all_valid,
            Self::Error { .. } => false,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// LM Studio reachability at the time of probing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationStatus {
    pub api_available: bool,
    pub models_available: bool,
    /// Only ever true when `api_available` is true
    pub chat_working: bool,
    /// Model ids listed by the models endpoint
    #[serde(default)]
    pub models: Vec<String>,
}

/// Latency probe results; an endpoint without data is omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResults {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub health: Option<LatencyStatistics>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api: Option<LatencyStatistics>,
}

impl PerformanceResults {
    /// Both endpoints produced data and both averages are under the target
    pub fn within_target(&self, target_ms: f64) -> bool {
        match (&self.health, &self.api) {
            (Some(health), Some(api)) => health.meets_target(target_ms) && api.meets_target(target_ms),
            _ => false,
        }
    }
}

/// Pass/fail flags derived from the stage results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub performance_ok: bool,
    pub config_ok: bool,
    pub optimization_ok: bool,
    pub integration_ready: bool,
}

impl ValidationSummary {
    pub fn derive(
        performance: &PerformanceResults,
        configuration: &ConfigurationOutcome,
        optimization: &OptimizationOutcome,
        integration: &IntegrationStatus,
        target_ms: f64,
    ) -> Self {
        Self {
            performance_ok: performance.within_target(target_ms),
            config_ok: configuration.is_success(),
            optimization_ok: optimization.all_valid(),
            integration_ready: integration.api_available,
        }
    }
}

/// Everything one validation run found, as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Local time the run started, ISO-8601 without offset
    pub timestamp: String,
    pub performance: PerformanceResults,
    pub configuration: ConfigurationOutcome,
    pub integration: IntegrationStatus,
    pub optimization: OptimizationOutcome,
    pub summary: ValidationSummary,
}

impl Report {
    /// Current local time in the report's timestamp format
    pub fn timestamp_now() -> String {
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
