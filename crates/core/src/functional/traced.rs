//! Operations that report their outcome through `tracing`

use super::operation::Operation;
use crate::config::{TraceConfig, TraceLevel};
use std::fmt::Display;
use tracing::{debug, error, info, trace, warn};

/// Wraps an operation, emitting one event at the configured level per failed
/// invocation (and per successful one when `record_success` is set)
#[derive(Debug, Clone)]
pub struct Traced<O> {
    operation: O,
    config: TraceConfig,
}

impl<O> Traced<O> {
    pub fn new(operation: O, config: TraceConfig) -> Self {
        Self { operation, config }
    }

    /// The configuration events are emitted with
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }
}

macro_rules! emit {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            TraceLevel::Trace => trace!($($fields)+),
            TraceLevel::Debug => debug!($($fields)+),
            TraceLevel::Info => info!($($fields)+),
            TraceLevel::Warn => warn!($($fields)+),
            TraceLevel::Error => error!($($fields)+),
        }
    };
}

impl<Args, O> Operation<Args> for Traced<O>
where
    O: Operation<Args>,
    O::Error: Display,
{
    type Output = O::Output;
    type Error = O::Error;

    fn invoke(&self, args: Args) -> Result<O::Output, O::Error> {
        let outcome = self.operation.invoke(args);
        let level = self.config.level;
        if !level.enabled() {
            return outcome;
        }
        let name = self.config.name.as_str();
        match &outcome {
            Ok(_) if self.config.record_success => {
                emit!(level, operation = name, "operation succeeded");
            }
            Ok(_) => {}
            Err(failure) => {
                emit!(level, operation = name, error = %failure, "operation failed");
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::functional::prelude::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        capture_at(tracing::Level::TRACE, f)
    }

    fn capture_at<T>(max_level: tracing::Level, f: impl FnOnce() -> T) -> (T, String) {
        let writer = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_max_level(max_level)
            .with_ansi(false)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, writer.contents())
    }

    fn port(s: &str) -> Result<u16, Error> {
        s.parse().map_err(Error::other)
    }

    #[test]
    fn test_failure_is_logged_with_name() {
        let op = port.traced(TraceConfig::named("parse-port").with_level(TraceLevel::Warn));
        let (result, logs) = capture(|| op.invoke(("99999",)));

        assert!(result.is_err());
        assert!(logs.contains("WARN"));
        assert!(logs.contains("parse-port"));
        assert!(logs.contains("number too large"));
    }

    #[test]
    fn test_success_is_silent_by_default() {
        let op = port.traced(TraceConfig::named("parse-port"));
        let (result, logs) = capture(|| op.invoke(("8080",)));

        assert_eq!(result.unwrap(), 8080);
        assert!(logs.is_empty());
    }

    #[test]
    fn test_success_recorded_when_enabled() {
        let op = port.traced(TraceConfig::named("parse-port").with_record_success(true));
        let (_, logs) = capture(|| op.invoke(("22",)));
        assert!(logs.contains("operation succeeded"));
    }

    #[test]
    fn test_success_uses_configured_level() {
        let op = port.traced(
            TraceConfig::named("parse-port")
                .with_level(TraceLevel::Warn)
                .with_record_success(true),
        );
        let (result, logs) = capture_at(tracing::Level::INFO, || op.invoke(("443",)));

        assert_eq!(result.unwrap(), 443);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("operation succeeded"));
        assert!(logs.contains("parse-port"));
    }

    #[test]
    fn test_events_below_subscriber_level_are_dropped() {
        let op = port.traced(
            TraceConfig::named("parse-port")
                .with_level(TraceLevel::Debug)
                .with_record_success(true),
        );
        let (_, logs) = capture_at(tracing::Level::INFO, || {
            let _ = op.invoke(("80",));
            op.invoke(("eighty",))
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn test_handled_failure_emits_debug_event() {
        let op = port.handle(|_: Error, _: &str| 0);
        let (value, logs) = capture(|| op.apply(("x",)));
        assert_eq!(value, 0);
        assert!(logs.contains("recovered by handler"));
    }
}
