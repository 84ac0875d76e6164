// File: parsley-forms/src/logging.rs
// Purpose: Diagnostic reporting for rules that have no client-side constraint

/// Receives one call per rule the factory could not map
pub trait RuleLogger: Send + Sync {
    fn unsupported_rule(&self, kind: &str);
}

/// Emits a `debug` level `tracing` event carrying the rule kind
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RuleLogger for TracingLogger {
    fn unsupported_rule(&self, kind: &str) {
        tracing::debug!(rule = kind, "rule has no client-side constraint, server-side only");
    }
}

/// Discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl RuleLogger for NullLogger {
    fn unsupported_rule(&self, _kind: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::Registry;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<(Level, Option<String>)>>>);

    struct RuleField(Option<String>);

    impl Visit for RuleField {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "rule" {
                self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = RuleField(None);
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    #[test]
    fn test_tracing_logger_emits_one_debug_event() {
        let capture = Capture::default();
        let subscriber = Registry::default().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            TracingLogger.unsupported_rule("Valid");
        });

        let events = capture.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], (Level::DEBUG, Some("Valid".to_string())));
    }

    #[test]
    fn test_null_logger_is_silent() {
        let capture = Capture::default();
        let subscriber = Registry::default().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            NullLogger.unsupported_rule("Valid");
        });

        assert!(capture.0.lock().unwrap().is_empty());
    }
}
