//! Data models and structures for the optimization validator

pub mod config;
pub mod metrics;
pub mod report;
pub mod settings;

// Re-export main model types
pub use config::Config;
pub use metrics::{LatencySamples, LatencyStatistics};
pub use report::{
    ConfigurationOutcome, IntegrationStatus, OptimizationOutcome, PerformanceResults, Report,
    SettingValidations, ValidationSummary,
};
pub use settings::{JsonObject, SettingsSnapshot};
