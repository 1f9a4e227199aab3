use fnx_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Subscriber settings for binaries embedding fnx operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset, e.g. `info` or `fnx_core=debug`
    pub default_directive: String,
    /// Colour the output
    pub ansi: bool,
    /// Print the event target
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            ansi: false,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        parse_directive(&config.default_directive)?;
        Ok(config)
    }

    /// The filter an `init` with this config installs
    pub fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => parse_directive(&self.default_directive),
        }
    }
}

/// Parse a filter directive, rejecting empty or malformed ones
pub fn parse_directive(directive: &str) -> Result<EnvFilter> {
    if directive.trim().is_empty() {
        return Err(Error::configuration("log directive cannot be empty"));
    }
    EnvFilter::try_new(directive)
        .map_err(|e| Error::configuration(format!("invalid log directive '{directive}': {e}")))
}

/// Initialize the tracing system
///
/// Installs a registry with an `EnvFilter` built from `RUST_LOG`, falling
/// back to `config.default_directive`, and a compact stderr formatter. Fails
/// when a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = config.filter()?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .compact()
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("tracing already initialized: {e}")))
}

/// Route events to the test harness output; repeated calls are no-ops
pub fn try_init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Create a span grouping the invocations of a named operation
pub fn operation_span(name: &str) -> Span {
    span!(Level::INFO, "operation", operation = %name)
}
