//! Main application orchestration and execution

use crate::{
    client::{HttpClient, ReqwestHttpClient},
    config::display_config_summary,
    defaults,
    diagnostics::IntegrationProber,
    error::Result,
    executor::LatencyProber,
    logging::{Logger, LoggerFactory},
    models::{Config, PerformanceResults, Report, ValidationSummary},
    output::{save_report, ConsoleFormatter, FormattingOptions},
    settings::{validate_configuration, validate_optimization_settings},
};
use std::sync::Arc;

/// Runs the validation stages in order and writes the report
pub struct App {
    config: Config,
    client: Arc<dyn HttpClient>,
    formatter: ConsoleFormatter,
}

impl App {
    /// Create a new application instance with a reqwest-backed client
    pub fn new(config: Config) -> Result<Self> {
        let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new()?);
        Ok(Self::with_client(config, client))
    }

    /// Create an application instance using the given HTTP client
    pub fn with_client(config: Config, client: Arc<dyn HttpClient>) -> Self {
        let formatter = ConsoleFormatter::new(FormattingOptions {
            enable_color: config.enable_color,
            verbose_mode: config.verbose,
            latency_target_ms: defaults::LATENCY_TARGET_MS,
        });
        Self { config, client, formatter }
    }

    /// Run every stage, print each section and save the report
    ///
    /// Only a failure to write the report is returned as an error.
    pub async fn run(self) -> Result<Report> {
        let factory = LoggerFactory::new(self.config.clone());
        let logger = factory.create_logger("app").await;

        if self.config.debug {
            println!("{} v{}", crate::PKG_NAME, crate::VERSION);
            if let (Some(build_time), Some(commit)) = (crate::BUILD_TIME, crate::GIT_COMMIT) {
                println!("Built {} from {}", build_time, commit);
            }
            println!("{}\n", display_config_summary(&self.config));
        }

        let timestamp = Report::timestamp_now();
        println!("{}", self.formatter.format_header(&timestamp));

        let performance = self.run_performance(&logger).await;
        println!("{}", self.formatter.format_performance(
            &[
                ("Health Endpoint", performance.health.as_ref()),
                ("API Endpoint", performance.api.as_ref()),
            ],
            self.config.iterations,
        ));

        let configuration = validate_configuration(&self.config.config_path);
        logger
            .info("Configuration stage finished")
            .field("path", self.config.config_path.display().to_string())
            .field("success", configuration.is_success())
            .log()
            .await;
        println!("{}", self.formatter.format_configuration(&configuration));

        let optimization = validate_optimization_settings(&self.config.config_path);
        logger
            .info("Optimization settings stage finished")
            .field("all_valid", optimization.all_valid())
            .log()
            .await;
        println!("{}", self.formatter.format_optimization(&optimization));

        let integration = IntegrationProber::new(
            self.client.clone(),
            self.config.lm_studio_endpoint(defaults::MODELS_PATH),
            self.config.api_endpoint(defaults::CHAT_PATH),
            logger.named("integration"),
        )
        .probe()
        .await;
        println!("{}", self.formatter.format_integration(&integration));

        let summary = ValidationSummary::derive(
            &performance,
            &configuration,
            &optimization,
            &integration,
            defaults::LATENCY_TARGET_MS,
        );
        print!("{}", self.formatter.format_summary(&summary));

        let report = Report {
            timestamp,
            performance,
            configuration,
            integration,
            optimization,
            summary,
        };

        if let Err(e) = save_report(&report, &self.config.output_path) {
            logger.error("Failed to save report").error_info(&e).log().await;
            return Err(e);
        }
        logger
            .info("Report saved")
            .field("path", self.config.output_path.display().to_string())
            .log()
            .await;
        println!("{}", self.formatter.format_saved(&self.config.output_path));

        Ok(report)
    }

    async fn run_performance(&self, logger: &Logger) -> PerformanceResults {
        let prober = LatencyProber::new(self.client.clone(), logger.named("latency"))
            .with_iterations(self.config.iterations)
            .with_timeout(defaults::PROBE_TIMEOUT);

        let health = prober
            .probe(&self.config.api_endpoint(defaults::HEALTH_PATH), "Health Endpoint")
            .await;
        let api = prober
            .probe(&self.config.api_endpoint(defaults::API_PATH), "API Endpoint")
            .await;

        PerformanceResults { health, api }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn closed_port_url() -> String {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        format!("http://127.0.0.1:{}", port)
    }

    fn config_in(dir: &TempDir, api_url: String, lm_studio_url: String) -> Config {
        Config {
            api_url,
            lm_studio_url,
            config_path: dir.path().join("config").join("inference-optimized.json"),
            output_path: dir.path().join("test_results").join("optimization_validation.json"),
            iterations: 3,
            enable_color: false,
            verbose: false,
            debug: false,
        }
    }

    #[tokio::test]
    async fn test_run_with_everything_down_still_writes_report() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, closed_port_url(), closed_port_url());
        let output_path = config.output_path.clone();

        let report = App::new(config).unwrap().run().await.unwrap();

        assert!(report.performance.health.is_none());
        assert!(report.performance.api.is_none());
        assert_eq!(report.configuration.message(), Some("Config file not found"));
        assert!(!report.optimization.is_success());
        assert!(!report.integration.api_available);
        assert!(!report.summary.performance_ok);
        assert!(!report.summary.config_ok);
        assert!(!report.summary.optimization_ok);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output_path).unwrap()).unwrap();
        assert_eq!(written["configuration"]["status"], "error");
        assert_eq!(written["optimization"]["status"], "error");
    }

    #[tokio::test]
    async fn test_run_with_healthy_services() {
        let api = MockServer::start().await;
        let lm_studio = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(3)
            .mount(&api)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(3)
            .mount(&api)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/lm-studio/chat"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&api)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "local-model"}]})))
            .mount(&lm_studio)
            .await;

        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, api.uri(), lm_studio.uri());
        fs::create_dir_all(config.config_path.parent().unwrap()).unwrap();
        fs::write(
            &config.config_path,
            r#"{"optimized_settings": {"temperature": 0.7, "max_tokens": 512, "top_p": 0.9, "top_k": 40, "repeat_penalty": 1.1, "num_threads": 8}, "hardware": {"cores": 8}}"#,
        )
        .unwrap();

        let report = App::new(config).unwrap().run().await.unwrap();

        let health = report.performance.health.as_ref().unwrap();
        assert_eq!(health.success_rate, 100.0);
        assert!(report.performance.api.is_some());
        assert!(report.summary.config_ok);
        assert!(report.summary.optimization_ok);
        assert!(report.integration.api_available);
        assert!(report.integration.models_available);
        assert!(report.integration.chat_working);
        assert!(report.summary.integration_ready);
    }

    #[tokio::test]
    async fn test_unwritable_output_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir, closed_port_url(), closed_port_url());
        config.iterations = 1;
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        config.output_path = blocker.join("report.json");

        let err = App::new(config).unwrap().run().await.unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
