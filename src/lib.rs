//! Optimization Validator
//!
//! Exercises a running inference API and its LM Studio integration, checks
//! endpoint latency, range-checks the optimized inference settings file and
//! saves a JSON report of everything it found.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod logging;
pub mod models;
pub mod output;
pub mod settings;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, LatencyStatistics, Report, IntegrationStatus};
pub use executor::LatencyProber;
pub use diagnostics::IntegrationProber;
pub use settings::{validate_configuration, validate_optimization_settings};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Build timestamp and commit, when the build script could determine them
pub const BUILD_TIME: Option<&str> = option_env!("BUILD_TIME");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_API_URL: &str = "http://localhost:3000";
    pub const DEFAULT_LM_STUDIO_URL: &str = "http://localhost:1234";
    pub const DEFAULT_CONFIG_PATH: &str = "config/inference-optimized.json";
    pub const DEFAULT_OUTPUT_PATH: &str = "test_results/optimization_validation.json";

    pub const DEFAULT_ITERATIONS: u32 = 10;
    pub const MAX_ITERATIONS: u32 = 100;

    /// Per-request timeout for latency probes
    pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
    /// Timeout for the LM Studio models listing
    pub const MODELS_TIMEOUT: Duration = Duration::from_secs(2);
    /// Timeout for the chat round-trip through the API gateway
    pub const CHAT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Average latency an endpoint must stay under to pass
    pub const LATENCY_TARGET_MS: f64 = 100.0;

    pub const HEALTH_PATH: &str = "/health";
    pub const API_PATH: &str = "/api/v1";
    pub const MODELS_PATH: &str = "/v1/models";
    pub const CHAT_PATH: &str = "/api/v1/lm-studio/chat";

    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
