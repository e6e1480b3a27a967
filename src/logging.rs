//! Structured logging setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Build the filter from `RUST_LOG` when set, else from the configured directive
fn env_filter(config: &AppConfig) -> EnvFilter {
  EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(&config.log_filter))
    .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Calling this twice is harmless; the
/// second install is ignored.
pub fn init_logging(config: &AppConfig) {
  let registry = tracing_subscriber::registry().with(env_filter(config));

  let result = match config.log_format {
    LogFormat::Json => registry.with(fmt::layer().with_target(true).json()).try_init(),
    LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
  };

  if result.is_ok() {
    tracing::debug!(
      format = ?config.log_format,
      filter = %config.log_filter,
      "Logging initialized"
    );
  }
}
