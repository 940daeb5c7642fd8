use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "trigon_engine=debug,wgpu_core=warn"). When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Modules that are chatty at `info` and are capped at `warn` by default.
const NOISY_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Explicit(String),
    Env(String),
    Default,
}

fn resolve_filter(configured: Option<String>, env: Option<String>) -> FilterSource {
    match (configured, env) {
        (Some(f), _) => FilterSource::Explicit(f),
        (None, Some(f)) if !f.trim().is_empty() => FilterSource::Env(f),
        _ => FilterSource::Default,
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`, before the runtime
/// starts creating windows.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let source = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());
        match &source {
            FilterSource::Explicit(filter) | FilterSource::Env(filter) => {
                builder.parse_filters(filter);
            }
            FilterSource::Default => {
                builder.filter_level(LevelFilter::Info);
                for module in NOISY_MODULES {
                    builder.filter_module(module, LevelFilter::Warn);
                }
            }
        }

        builder.write_style(config.write_style);

        // try_init: a test harness or embedding binary may already own the logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized ({source:?})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let src = resolve_filter(Some("debug".into()), Some("trace".into()));
        assert_eq!(src, FilterSource::Explicit("debug".into()));
    }

    #[test]
    fn env_filter_used_when_not_configured() {
        let src = resolve_filter(None, Some("trigon_engine=trace".into()));
        assert_eq!(src, FilterSource::Env("trigon_engine=trace".into()));
    }

    #[test]
    fn blank_env_falls_back_to_default() {
        assert_eq!(resolve_filter(None, Some("  ".into())), FilterSource::Default);
        assert_eq!(resolve_filter(None, None), FilterSource::Default);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("trace".into()),
            ..LoggingConfig::default()
        });
    }
}
