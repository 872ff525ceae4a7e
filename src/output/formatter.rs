//! Console formatting of each validation stage
//!
//! Every method returns the rendered text so the caller decides when to
//! print it; colors are applied only when enabled.

use crate::{
    models::{
        ConfigurationOutcome, IntegrationStatus, LatencyStatistics, OptimizationOutcome,
        ValidationSummary,
    },
    types::{CheckStatus, LatencyVerdict},
};
use colored::*;
use std::fmt::Write as _;
use std::path::Path;

/// Width of section rules
const RULE_WIDTH: usize = 60;

/// Settings shown in the configuration section, with their labels
const DISPLAYED_SETTINGS: [(&str, &str); 7] = [
    ("Temperature", "temperature"),
    ("Max Tokens", "max_tokens"),
    ("Top P", "top_p"),
    ("Top K", "top_k"),
    ("Repeat Penalty", "repeat_penalty"),
    ("Threads", "num_threads"),
    ("Context Length", "context_length"),
];

/// Formatting options
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    pub enable_color: bool,
    pub verbose_mode: bool,
    /// Average latency an endpoint must stay under
    pub latency_target_ms: f64,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: crate::defaults::DEFAULT_ENABLE_COLOR,
            verbose_mode: false,
            latency_target_ms: crate::defaults::LATENCY_TARGET_MS,
        }
    }
}

/// Renders the human-readable validation report
pub struct ConsoleFormatter {
    options: FormattingOptions,
}

impl ConsoleFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    /// Glyph plus label, colored by outcome
    fn status(&self, status: CheckStatus, label: &str) -> String {
        let color = match status {
            CheckStatus::Pass => Color::Green,
            CheckStatus::Warn => Color::Yellow,
            CheckStatus::Fail => Color::Red,
        };
        if label.is_empty() {
            status.symbol().to_string()
        } else {
            format!("{} {}", status.symbol(), self.colorize(label, color))
        }
    }

    fn section(&self, title: &str) -> String {
        format!("{}\n{}\n", self.bold(title), "-".repeat(RULE_WIDTH))
    }

    /// Report banner
    pub fn format_header(&self, timestamp: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!(
            "{}\n{}\n{}\nTimestamp: {}\n",
            rule,
            self.bold("Optimization Validation Report"),
            rule,
            timestamp
        )
    }

    /// Stage 1: latency of both endpoints
    pub fn format_performance(
        &self,
        probes: &[(&str, Option<&LatencyStatistics>)],
        iterations: u32,
    ) -> String {
        let mut output = self.section("1. Performance Validation");

        for (i, (name, stats)) in probes.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            match stats {
                Some(stats) => output.push_str(&self.format_latency(stats)),
                None => {
                    let _ = writeln!(
                        output,
                        "   {}: {}",
                        name,
                        self.status(
                            CheckStatus::Warn,
                            &format!("No data (all {} requests failed)", iterations)
                        )
                    );
                }
            }
        }

        output
    }

    fn format_latency(&self, stats: &LatencyStatistics) -> String {
        let target = self.options.latency_target_ms;
        let verdict = LatencyVerdict::from_average(stats.average, target);
        let status = match verdict {
            LatencyVerdict::Pass => self.status(CheckStatus::Pass, "PASS"),
            LatencyVerdict::Slow => self.status(CheckStatus::Warn, "SLOW"),
        };

        let mut output = String::new();
        let _ = writeln!(output, "   {}:", stats.name);
        let _ = writeln!(output, "     Average: {:.2}ms", stats.average);
        let _ = writeln!(output, "     Min: {:.2}ms", stats.min);
        let _ = writeln!(output, "     Max: {:.2}ms", stats.max);
        let _ = writeln!(output, "     Median: {:.2}ms", stats.median);
        if self.options.verbose_mode {
            let _ = writeln!(output, "     Std Dev: {:.2}ms", stats.stdev);
            let _ = writeln!(output, "     Errors: {}", stats.errors);
        }
        let _ = writeln!(output, "     Success Rate: {:.1}%", stats.success_rate);
        let _ = writeln!(output, "     Target: <{}ms", target);
        let _ = writeln!(output, "     Status: {}", status);
        output
    }

    /// Stage 2: loaded settings, or why they could not be loaded
    pub fn format_configuration(&self, outcome: &ConfigurationOutcome) -> String {
        let mut output = self.section("2. Configuration Validation");

        match outcome {
            ConfigurationOutcome::Success { settings, hardware, .. } => {
                output.push_str("   Optimization Settings:\n");
                for (label, key) in DISPLAYED_SETTINGS {
                    let _ = writeln!(output, "     {}: {}", label, settings.display(key));
                }
                if self.options.verbose_mode {
                    if let Some(hardware) = hardware.as_object().filter(|h| !h.is_empty()) {
                        output.push_str("   Hardware:\n");
                        for (key, value) in hardware {
                            let _ = writeln!(output, "     {}: {}", key, value);
                        }
                    }
                }
                let _ = writeln!(
                    output,
                    "   Status: {}",
                    self.status(CheckStatus::Pass, "Configuration loaded and valid")
                );
            }
            ConfigurationOutcome::Error { message } => {
                let _ = writeln!(output, "   Status: {}", self.status(CheckStatus::Fail, message));
            }
        }

        output
    }

    /// Stage 3: per-setting range checks
    pub fn format_optimization(&self, outcome: &OptimizationOutcome) -> String {
        let mut output = self.section("3. Optimization Settings Validation");

        match outcome {
            OptimizationOutcome::Success { validations, all_valid, .. } => {
                output.push_str("   Setting Validations:\n");
                for (name, valid) in validations.entries() {
                    let glyph = self.status(CheckStatus::from_bool(valid, CheckStatus::Fail), "");
                    let _ = writeln!(output, "     {} {}: {}", glyph, name, valid);
                }
                let overall = if *all_valid {
                    self.status(CheckStatus::Pass, "ALL VALID")
                } else {
                    self.status(CheckStatus::Fail, "SOME INVALID")
                };
                let _ = writeln!(output, "   Overall: {}", overall);
            }
            OptimizationOutcome::Error { message } => {
                let _ = writeln!(output, "   Status: {}", self.status(CheckStatus::Fail, message));
            }
        }

        output
    }

    /// Stage 4: LM Studio integration
    pub fn format_integration(&self, status: &IntegrationStatus) -> String {
        let mut output = self.section("4. LM Studio Integration");

        let line = |ok: bool, warning: &str| {
            if ok {
                self.status(CheckStatus::Pass, "")
            } else {
                self.status(CheckStatus::Warn, warning)
            }
        };

        let _ = writeln!(output, "   API Available: {}", line(status.api_available, "Not running"));
        let _ = writeln!(output, "   Models Available: {}", line(status.models_available, "No models"));
        if self.options.verbose_mode && !status.models.is_empty() {
            let _ = writeln!(output, "     Models: {}", status.models.join(", "));
        }
        let _ = writeln!(output, "   Chat Working: {}", line(status.chat_working, "Not tested"));

        output
    }

    /// Final pass/fail summary
    pub fn format_summary(&self, summary: &ValidationSummary) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut output = format!("{}\n{}\n{}\n", rule, self.bold("Validation Summary"), rule);

        let performance = if summary.performance_ok {
            self.status(CheckStatus::Pass, "PASS")
        } else {
            self.status(CheckStatus::Warn, "NEEDS ATTENTION")
        };
        let pass_fail = |ok: bool| {
            if ok {
                self.status(CheckStatus::Pass, "PASS")
            } else {
                self.status(CheckStatus::Fail, "FAIL")
            }
        };
        let integration = if summary.integration_ready {
            self.status(CheckStatus::Pass, "READY")
        } else {
            self.status(CheckStatus::Warn, "LM Studio not running")
        };

        let _ = writeln!(output, "Performance: {}", performance);
        let _ = writeln!(output, "Configuration: {}", pass_fail(summary.config_ok));
        let _ = writeln!(output, "Optimization: {}", pass_fail(summary.optimization_ok));
        let _ = writeln!(output, "Integration: {}", integration);

        output
    }

    /// Closing lines after the report file was written
    pub fn format_saved(&self, path: &Path) -> String {
        format!(
            "\n📄 Results saved to: {}\n\n{}",
            path.display(),
            self.status(CheckStatus::Pass, "Validation complete!")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SettingValidations;
    use serde_json::json;

    fn plain() -> ConsoleFormatter {
        ConsoleFormatter::new(FormattingOptions {
            enable_color: false,
            ..Default::default()
        })
    }

    fn stats(average: f64) -> LatencyStatistics {
        LatencyStatistics {
            name: "Health Endpoint".to_string(),
            average,
            min: average - 1.0,
            max: average + 1.0,
            median: average,
            stdev: 0.5,
            errors: 0,
            success_rate: 100.0,
        }
    }

    #[test]
    fn test_header() {
        let header = plain().format_header("2026-10-18T10:00:00.000000");
        assert!(header.starts_with(&"=".repeat(60)));
        assert!(header.contains("Optimization Validation Report"));
        assert!(header.contains("Timestamp: 2026-10-18T10:00:00.000000"));
    }

    #[test]
    fn test_performance_pass_and_slow() {
        let fast = stats(12.345);
        let slow = LatencyStatistics { name: "API Endpoint".to_string(), ..stats(250.0) };

        let output = plain().format_performance(
            &[("Health Endpoint", Some(&fast)), ("API Endpoint", Some(&slow))],
            10,
        );
        assert!(output.contains("1. Performance Validation"));
        assert!(output.contains("Average: 12.35ms"));
        assert!(output.contains("Success Rate: 100.0%"));
        assert!(output.contains("Target: <100ms"));
        assert!(output.contains("✅ PASS"));
        assert!(output.contains("SLOW"));
    }

    #[test]
    fn test_performance_no_data() {
        let output = plain().format_performance(&[("Health Endpoint", None)], 10);
        assert!(output.contains("Health Endpoint: ⚠️  No data (all 10 requests failed)"));
    }

    #[test]
    fn test_configuration_success_lists_settings() {
        let outcome = ConfigurationOutcome::Success {
            settings: serde_json::from_value(json!({"temperature": 0.7, "num_threads": 8})).unwrap(),
            hardware: json!({}),
            validated: true,
        };
        let output = plain().format_configuration(&outcome);
        assert!(output.contains("Temperature: 0.7"));
        assert!(output.contains("Threads: 8"));
        assert!(output.contains("Context Length: None"));
        assert!(output.contains("✅ Configuration loaded and valid"));
    }

    #[test]
    fn test_configuration_error() {
        let output = plain().format_configuration(&ConfigurationOutcome::error("Config file not found"));
        assert!(output.contains("Status: ❌ Config file not found"));
    }

    #[test]
    fn test_optimization_section() {
        let outcome = OptimizationOutcome::Success {
            settings: Default::default(),
            validations: SettingValidations {
                temperature: true,
                max_tokens: false,
                top_p: true,
                top_k: true,
                repeat_penalty: true,
                num_threads: true,
            },
            all_valid: false,
        };
        let output = plain().format_optimization(&outcome);
        assert!(output.contains("✅ temperature: true"));
        assert!(output.contains("❌ max_tokens: false"));
        assert!(output.contains("Overall: ❌ SOME INVALID"));
    }

    #[test]
    fn test_integration_section() {
        let output = plain().format_integration(&IntegrationStatus::default());
        assert!(output.contains("API Available: ⚠️  Not running"));
        assert!(output.contains("Models Available: ⚠️  No models"));
        assert!(output.contains("Chat Working: ⚠️  Not tested"));
    }

    #[test]
    fn test_summary() {
        let output = plain().format_summary(&ValidationSummary {
            performance_ok: false,
            config_ok: true,
            optimization_ok: false,
            integration_ready: false,
        });
        assert!(output.contains("Performance: ⚠️  NEEDS ATTENTION"));
        assert!(output.contains("Configuration: ✅ PASS"));
        assert!(output.contains("Optimization: ❌ FAIL"));
        assert!(output.contains("Integration: ⚠️  LM Studio not running"));
    }

    #[test]
    fn test_verbose_shows_spread() {
        let formatter = ConsoleFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: true,
            ..Default::default()
        });
        let output = formatter.format_performance(&[("Health Endpoint", Some(&stats(10.0)))], 10);
        assert!(output.contains("Std Dev: 0.50ms"));
        assert!(output.contains("Errors: 0"));
    }
}
