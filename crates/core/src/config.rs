//! Configuration for traced operations

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Severity at which a traced operation reports its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl TraceLevel {
    /// Whether the current maximum level lets events at this level through
    pub fn enabled(self) -> bool {
        tracing::Level::from(self) <= tracing::level_filters::LevelFilter::current()
    }
}

impl From<TraceLevel> for tracing::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Trace => tracing::Level::TRACE,
            TraceLevel::Debug => tracing::Level::DEBUG,
            TraceLevel::Info => tracing::Level::INFO,
            TraceLevel::Warn => tracing::Level::WARN,
            TraceLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// How a [`Traced`](crate::functional::Traced) operation reports invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Name recorded in the `operation` field of every event
    pub name: String,
    /// Level used for every event, failures and recorded successes alike
    pub level: TraceLevel,
    /// Also emit an event for successful invocations
    pub record_success: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            name: "operation".to_string(),
            level: TraceLevel::default(),
            record_success: false,
        }
    }
}

impl TraceConfig {
    /// Create a config with the given operation name and default settings
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the failure level
    #[must_use]
    pub fn with_level(mut self, level: TraceLevel) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable success events
    #[must_use]
    pub fn with_record_success(mut self, record_success: bool) -> Self {
        self.record_success = record_success;
        self
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for invalid values
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration("trace name cannot be empty"));
        }
        Ok(())
    }
}
