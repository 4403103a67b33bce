//! Configuration types for stream instrumentation

use serde::{Deserialize, Serialize};

use crate::error::StreamResult;

/// Metrics configuration for [`LazyStream::with_metrics`](crate::LazyStream::with_metrics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Name reported in log lines and metric snapshots
    pub label: String,
    /// When false the metered stream only forwards calls
    pub enabled: bool,
    /// Log every yielded element at trace level
    pub trace_items: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            label: "stream".to_string(),
            enabled: true,
            trace_items: false,
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Enable or disable recording
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enable or disable per-item trace logging
    pub fn trace_items(mut self, trace_items: bool) -> Self {
        self.trace_items = trace_items;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
