//! Sequential latency probing of HTTP endpoints

use crate::{
    client::HttpClient,
    logging::Logger,
    models::{LatencySamples, LatencyStatistics},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Issues repeated GET requests and summarizes their round-trip times
pub struct LatencyProber {
    client: Arc<dyn HttpClient>,
    iterations: u32,
    timeout: Duration,
    logger: Logger,
}

impl LatencyProber {
    pub fn new(client: Arc<dyn HttpClient>, logger: Logger) -> Self {
        Self {
            client,
            iterations: crate::defaults::DEFAULT_ITERATIONS,
            timeout: crate::defaults::PROBE_TIMEOUT,
            logger,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Probe `url` and summarize; `None` when no request succeeded
    pub async fn probe(&self, url: &str, name: &str) -> Option<LatencyStatistics> {
        let samples = self.collect_samples(url).await;

        self.logger
            .info(&format!("Probed {}", name))
            .field("url", url)
            .field("successes", samples.success_count())
            .field("errors", samples.errors())
            .log()
            .await;

        samples.statistics(name)
    }

    /// Issue the configured number of requests one after another
    pub async fn collect_samples(&self, url: &str) -> LatencySamples {
        let mut samples = LatencySamples::new();

        for attempt in 1..=self.iterations {
            let start = Instant::now();
            match self.client.get(url, self.timeout).await {
                Ok(response) if response.is_ok() => {
                    let elapsed = start.elapsed();
                    samples.record_success(elapsed);
                    self.logger
                        .debug("Probe request succeeded")
                        .field("url", url)
                        .field("attempt", attempt)
                        .field("status", response.status_code)
                        .field("elapsed_ms", elapsed.as_secs_f64() * 1000.0)
                        .log()
                        .await;
                }
                Ok(response) => {
                    samples.record_error();
                    self.logger
                        .debug("Probe request returned non-200 status")
                        .field("url", url)
                        .field("attempt", attempt)
                        .field("status", response.status_code)
                        .log()
                        .await;
                }
                Err(e) => {
                    samples.record_error();
                    self.logger
                        .debug("Probe request failed")
                        .field("url", url)
                        .field("attempt", attempt)
                        .error_info(&e)
                        .log()
                        .await;
                }
            }
        }

        samples
    }
}
