//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

/// Optimization Validator - checks inference API latency, optimized settings and LM Studio integration
#[derive(Parser, Debug, Clone)]
#[command(name = "optimization-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the inference API
    #[arg(long, env = "API_URL", default_value = crate::defaults::DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL of the LM Studio server
    #[arg(long = "lm-studio-url", env = "LM_STUDIO_API_URL", default_value = crate::defaults::DEFAULT_LM_STUDIO_URL)]
    pub lm_studio_url: String,

    /// Optimized inference configuration file to validate
    #[arg(long, env = "OPTIMIZATION_CONFIG", default_value = crate::defaults::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Where to write the JSON report
    #[arg(short, long, env = "VALIDATION_OUTPUT", default_value = crate::defaults::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of requests per latency probe
    #[arg(
        short = 'n',
        long,
        env = "PROBE_ITERATIONS",
        default_value_t = crate::defaults::DEFAULT_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..=crate::defaults::MAX_ITERATIONS as i64)
    )]
    pub iterations: u32,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}
