//! Navigator configuration section.

use serde::{Deserialize, Serialize};

use crate::error::{MowerError, Result};
use crate::navigation::DistanceMetric;

use super::defaults;

/// Configuration for the coverage navigator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Ticks a long-range target may be chased before it is flagged
    /// inaccessible (flagged once the count exceeds this).
    /// Default: 6
    #[serde(default = "defaults::retry_limit")]
    pub retry_limit: u32,

    /// Number of recently vacated positions avoided when stepping.
    /// Default: 2
    #[serde(default = "defaults::history_len")]
    pub history_len: usize,

    /// Metric used to rank long-range targets.
    /// Default: toroidal Manhattan
    #[serde(default)]
    pub metric: DistanceMetric,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            retry_limit: 6,
            history_len: 2,
            metric: DistanceMetric::ToroidalManhattan,
        }
    }
}

impl NavigatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for retry limit.
    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit;
        self
    }

    /// Builder-style setter for history length.
    pub fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    /// Builder-style setter for distance metric.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Reject limits that would disable the stuck or anti-oscillation rules.
    pub fn validate(&self) -> Result<()> {
        if self.retry_limit == 0 {
            return Err(MowerError::InvalidNavigatorConfig(
                "retry_limit must be at least 1".to_string(),
            ));
        }
        if self.history_len == 0 {
            return Err(MowerError::InvalidNavigatorConfig(
                "history_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
