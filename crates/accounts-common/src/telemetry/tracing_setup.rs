//! Subscriber installation for the `tracing` events emitted by the
//! repositories and services. `RUST_LOG` takes precedence over the
//! configured level.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

/// How events are filtered and rendered
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Fallback level when `RUST_LOG` is unset
    pub level: Level,
    /// Emit one JSON object per event
    pub json: bool,
    /// Log span open/close (shows repository call timings)
    pub span_events: bool,
    /// Source file and line on every event
    pub file_line: bool,
    /// Include the event target (module path)
    pub target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
            target: true,
        }
    }
}

impl TracingConfig {
    /// Debug level, human-readable, with span timings
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            span_events: true,
            ..Self::default()
        }
    }

    /// Info level, JSON lines, no source locations
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            span_events: false,
            file_line: false,
            target: true,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = fmt::layer()
            .with_file(self.file_line)
            .with_line_number(self.file_line)
            .with_target(self.target)
            .with_span_events(self.span_events());

        if self.json {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    }

    fn try_init(&self) -> Result<(), TryInitError> {
        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .with(self.env_filter())
            .try_init()
    }
}

/// Install the global subscriber with [`TracingConfig::default`]
///
/// # Panics
/// Panics if a global subscriber is already set.
pub fn init_tracing() {
    init_tracing_with_config(TracingConfig::default());
}

/// Install the global subscriber
///
/// # Panics
/// Panics if a global subscriber is already set.
pub fn init_tracing_with_config(config: TracingConfig) {
    if let Err(err) = config.try_init() {
        panic!("failed to initialize tracing: {err}");
    }
}

/// Non-panicking [`init_tracing`]
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Non-panicking [`init_tracing_with_config`]; later calls return
/// `AlreadyInitialized`.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    config
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json);
        assert!(!config.span_events);
        assert!(config.file_line);
    }

    #[test]
    fn test_development_preset_logs_spans() {
        let config = TracingConfig::development();
        assert_eq!(config.level, Level::DEBUG);
        assert!(!config.json);
        assert!(config.span_events);
    }

    #[test]
    fn test_production_preset_emits_json() {
        let config = TracingConfig::production();
        assert_eq!(config.level, Level::INFO);
        assert!(config.json);
        assert!(!config.file_line);
    }

    #[test]
    fn test_second_init_reports_already_initialized() {
        // Whichever call wins, the other must fail without panicking
        let first = try_init_tracing();
        let second = try_init_tracing();
        assert!(first.is_err() || second.is_err());
        assert!(matches!(second, Err(TracingError::AlreadyInitialized)));
    }
}
