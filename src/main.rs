//! Optimization Validator - Main CLI Application
//!
//! Probes the inference API and LM Studio, validates the optimized settings
//! file and saves a JSON report. Validation failures are reported, not
//! turned into a failing exit status.

use clap::Parser;
use optimization_validator::{
    app::App,
    cli::Cli,
    config::{load_config, EnvManager},
    error::{ErrorReporter, Result},
};
use std::process;

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    // .env must be loaded before clap reads its env fallbacks
    let env_loaded = EnvManager::load_env_file();

    let cli = Cli::parse();
    let reporter = ErrorReporter::new(!cli.no_color, cli.verbose);

    if let Err(e) = run_application(cli, env_loaded).await {
        reporter.report_error(&e);
        process::exit(e.exit_code());
    }
}

async fn run_application(cli: Cli, env_loaded: Result<bool>) -> Result<()> {
    let loaded = env_loaded?;
    if cli.debug {
        if loaded {
            println!("Loaded configuration from .env file");
        } else {
            println!("No .env file found, using defaults, environment and CLI arguments");
        }
    }

    let config = load_config(cli)?;
    App::new(config)?.run().await?;
    Ok(())
}
