//! Logging initialization and configuration.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Builds the level filter. `RUST_LOG` wins over the configured level.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    level_filter(directives.as_deref(), config)
}

/// Unparseable directives fall back to the configured level.
fn level_filter(directives: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}

/// Initializes the global subscriber based on configuration.
///
/// `format = "json"` emits one JSON object per event; anything else uses the
/// human-readable pretty printer. Fails if a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let subscriber = tracing_subscriber::registry().with(env_filter(config));

    match config.format.as_str() {
        "json" => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true);
            subscriber.with(json_layer).try_init()
        }
        _ => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            subscriber.with(pretty_layer).try_init()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_subscriber::filter::LevelFilter;

    fn warn_config() -> LoggingConfig {
        LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }

    #[test]
    fn test_level_filter_uses_configured_level() {
        assert_eq!(
            level_filter(None, &warn_config()).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_level_filter_directives_override_config() {
        assert_eq!(
            level_filter(Some("debug"), &warn_config()).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_init_logging_twice_fails() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        };

        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
