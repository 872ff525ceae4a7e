//! Run configuration from parsed CLI arguments

use crate::{cli::Cli, error::Result, models::Config};

/// Builds the run configuration from CLI arguments
///
/// Environment variables and `.env` values reach the configuration through
/// clap's `env` fallbacks, so the CLI struct already holds the merged values.
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and validate the complete configuration
    pub fn parse(&self) -> Result<Config> {
        let config = Config {
            api_url: self.cli.api_url.clone(),
            lm_studio_url: self.cli.lm_studio_url.clone(),
            config_path: self.cli.config.clone(),
            output_path: self.cli.output.clone(),
            iterations: self.cli.iterations,
            enable_color: !self.cli.no_color,
            verbose: self.cli.verbose,
            debug: self.cli.debug,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Configuration summary for debug output
pub fn display_config_summary(config: &Config) -> String {
    [
        format!("API URL: {}", config.api_url),
        format!("LM Studio URL: {}", config.lm_studio_url),
        format!("Config File: {}", config.config_path.display()),
        format!("Report File: {}", config.output_path.display()),
        format!("Iterations: {}", config.iterations),
        format!("Color Output: {}", config.enable_color),
        format!("Verbose: {}", config.verbose),
        format!("Debug: {}", config.debug),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["optimization-validator"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_cli_values_reach_config() {
        let config = load_config(cli(&[
            "--api-url",
            "http://10.0.0.5:3000",
            "--iterations",
            "4",
            "--no-color",
            "--debug",
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://10.0.0.5:3000");
        assert_eq!(config.iterations, 4);
        assert!(!config.enable_color);
        assert!(config.debug);
        assert!(!config.verbose);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = load_config(cli(&["--lm-studio-url", "localhost:1234"])).unwrap_err();
        assert_eq!(err.category(), "CONFIG");
    }

    #[test]
    fn test_summary_lists_paths() {
        let config = Config::default();
        let summary = display_config_summary(&config);
        assert!(summary.contains("Config File: config/inference-optimized.json"));
        assert!(summary.contains("Report File: test_results/optimization_validation.json"));
        assert!(summary.contains("Iterations: 10"));
    }
}
