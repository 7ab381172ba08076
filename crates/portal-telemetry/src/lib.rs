//! Tracing bootstrap shared by portal binaries.
//!
//! Installs a global `tracing` subscriber writing either JSON lines or
//! human-readable text to stdout. `RUST_LOG` takes precedence over the
//! configured level when it is set.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use typed_builder::TypedBuilder;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable, single-line events.
    Text,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Configures the global tracing subscriber.
#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetryConfig {
    #[builder(default)]
    pub format: LogFormat,
    /// An `EnvFilter` directive such as `info` or `portal_gateway=debug,info`.
    #[builder(default = "info".to_string(), setter(into))]
    pub level: String,
    #[builder(default = true)]
    pub ansi: bool,
}

impl TelemetryConfig {
    /// Builds the filter for this configuration, preferring `RUST_LOG`.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|source| TelemetryError::InvalidFilter {
            directive: self.level.clone(),
            source,
        })
    }
}

/// Installs the global subscriber described by `config`.
///
/// Fails if the filter directive is malformed or a global subscriber has
/// already been installed.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
        LogFormat::Text => builder.with_ansi(config.ansi).try_init(),
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = TelemetryConfig::builder().build();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert!(config.ansi);
    }

    #[test]
    fn invalid_filter_is_rejected() {
        // only meaningful when RUST_LOG does not override the directive
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig::builder().level("info,portal=notalevel").build();
        assert!(matches!(
            config.env_filter(),
            Err(TelemetryError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn second_init_fails() {
        let config = TelemetryConfig::builder().format(LogFormat::Text).build();
        // the first call may race with other tests; the second must fail
        let _ = init(&config);
        assert!(matches!(init(&config), Err(TelemetryError::Install(_))));
    }
}
