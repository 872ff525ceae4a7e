//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Latency classification of a probed endpoint against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatencyVerdict {
    /// Average latency under the target
    Pass,
    /// Average latency at or above the target
    Slow,
}

impl LatencyVerdict {
    /// Classify an average latency in milliseconds against a target
    pub fn from_average(average_ms: f64, target_ms: f64) -> Self {
        if average_ms < target_ms {
            Self::Pass
        } else {
            Self::Slow
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Outcome glyph shown next to a check on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Pass,
    /// Not fatal, but needs attention
    Warn,
    /// Check failed
    Fail,
}

impl CheckStatus {
    /// Map a boolean check, choosing how a failure is shown
    pub fn from_bool(ok: bool, failure: CheckStatus) -> Self {
        if ok {
            Self::Pass
        } else {
            failure
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Warn => "⚠️ ",
            Self::Fail => "❌",
        }
    }
}
