//! Run configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Endpoints, paths and switches the validator runs with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the inference API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the LM Studio server
    #[serde(default = "default_lm_studio_url")]
    pub lm_studio_url: String,

    /// Optimized inference configuration file
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,

    /// Report destination
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Requests per latency probe
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            lm_studio_url: default_lm_studio_url(),
            config_path: default_config_path(),
            output_path: default_output_path(),
            iterations: default_iterations(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return the first problem found
    pub fn validate(&self) -> Result<()> {
        Self::validate_base_url("API URL", &self.api_url)?;
        Self::validate_base_url("LM Studio URL", &self.lm_studio_url)?;

        if self.iterations == 0 {
            return Err(AppError::config("Iterations must be greater than 0"));
        }

        if self.iterations > crate::defaults::MAX_ITERATIONS {
            return Err(AppError::config(format!(
                "Iterations cannot exceed {}",
                crate::defaults::MAX_ITERATIONS
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::config("Output path cannot be empty"));
        }

        if self.config_path.as_os_str().is_empty() {
            return Err(AppError::config("Config path cannot be empty"));
        }

        Ok(())
    }

    fn validate_base_url(label: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(AppError::config(format!("{} cannot be empty", label)));
        }

        match url::Url::parse(value) {
            Ok(parsed) => match parsed.scheme() {
                "http" | "https" => Ok(()),
                other => Err(AppError::config(format!(
                    "{} must use http or https, got '{}': {}",
                    label, other, value
                ))),
            },
            Err(e) => Err(AppError::config(format!("Invalid {} '{}': {}", label, value, e))),
        }
    }

    /// Join a path onto the inference API base URL
    pub fn api_endpoint(&self, path: &str) -> String {
        join_url(&self.api_url, path)
    }

    /// Join a path onto the LM Studio base URL
    pub fn lm_studio_endpoint(&self, path: &str) -> String {
        join_url(&self.lm_studio_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn default_api_url() -> String {
    crate::defaults::DEFAULT_API_URL.to_string()
}

fn default_lm_studio_url() -> String {
    crate::defaults::DEFAULT_LM_STUDIO_URL.to_string()
}

fn default_config_path() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_CONFIG_PATH)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_OUTPUT_PATH)
}

fn default_iterations() -> u32 {
    crate::defaults::DEFAULT_ITERATIONS
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
