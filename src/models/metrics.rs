//! Latency measurement data structures

use crate::stats::StatisticsCalculator;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-call round-trip times collected by one latency probe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencySamples {
    /// Successful round-trip times in milliseconds, in request order
    durations_ms: Vec<f64>,
    /// Requests that failed or returned a non-success status
    errors: u32,
}

impl LatencySamples {
    /// Create an empty sample set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the elapsed time of a successful request
    pub fn record_success(&mut self, elapsed: Duration) {
        self.durations_ms.push(elapsed.as_secs_f64() * 1000.0);
    }

    /// Record a failed request
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn durations_ms(&self) -> &[f64] {
        &self.durations_ms
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn success_count(&self) -> usize {
        self.durations_ms.len()
    }

    /// Number of requests attempted so far
    pub fn attempts(&self) -> u32 {
        self.durations_ms.len() as u32 + self.errors
    }

    /// Summarize the samples, or `None` when no request succeeded
    pub fn statistics(&self, name: &str) -> Option<LatencyStatistics> {
        LatencyStatistics::from_samples(name, self)
    }
}

/// Summary statistics of one latency probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyStatistics {
    /// Display name of the probed endpoint
    pub name: String,
    /// Mean round-trip time (milliseconds)
    pub average: f64,
    /// Fastest round-trip (milliseconds)
    pub min: f64,
    /// Slowest round-trip (milliseconds)
    pub max: f64,
    /// Median round-trip (milliseconds)
    pub median: f64,
    /// Sample standard deviation (milliseconds), 0 with a single sample
    pub stdev: f64,
    /// Failed requests
    pub errors: u32,
    /// Successful requests as a percentage of attempts (0.0-100.0)
    pub success_rate: f64,
}

impl LatencyStatistics {
    /// Build statistics from a sample set; `None` when there is nothing to summarize
    pub fn from_samples(name: &str, samples: &LatencySamples) -> Option<Self> {
        let values = samples.durations_ms();
        let attempts = samples.attempts();

        Some(Self {
            name: name.to_string(),
            average: StatisticsCalculator::mean(values)?,
            min: StatisticsCalculator::min(values)?,
            max: StatisticsCalculator::max(values)?,
            median: StatisticsCalculator::median(values)?,
            stdev: StatisticsCalculator::sample_std_dev(values)?,
            errors: samples.errors(),
            success_rate: (values.len() as f64 / attempts as f64) * 100.0,
        })
    }

    /// Whether the average is under the given target
    pub fn meets_target(&self, target_ms: f64) -> bool {
        self.average < target_ms
    }
}
