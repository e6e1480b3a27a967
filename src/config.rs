//! Runtime configuration from environment variables
//!
//! `.env` is loaded by `lib::run` before `AppConfig::from_env` is called.
//! Unset variables fall back to defaults; set-but-malformed ones are errors.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const LOGIN_DELAY_ENV: &str = "SPORTS_ANALYTICS_LOGIN_DELAY_MS";
pub const REPORT_DELAY_ENV: &str = "SPORTS_ANALYTICS_REPORT_DELAY_MS";
pub const LOG_FILTER_ENV: &str = "SPORTS_ANALYTICS_LOG";
pub const LOG_FORMAT_ENV: &str = "SPORTS_ANALYTICS_LOG_FORMAT";

const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;
const DEFAULT_REPORT_DELAY_MS: u64 = 2000;
const DEFAULT_LOG_FILTER: &str = "info";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value:?}")]
  Invalid { key: String, value: String },
}

/// ---------------------------------------------------------------------------
/// Log Format
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
  Compact,
}

impl FromStr for LogFormat {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "pretty" => Ok(Self::Pretty),
      "json" => Ok(Self::Json),
      "compact" => Ok(Self::Compact),
      _ => Err(format!("Unknown log format: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// App Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
  /// Artificial latency before a login attempt resolves
  pub login_delay_ms: u64,
  /// Artificial latency before a report is ready
  pub report_delay_ms: u64,
  /// `tracing_subscriber::EnvFilter` directive
  pub log_filter: String,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
      report_delay_ms: DEFAULT_REPORT_DELAY_MS,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
      log_format: LogFormat::default(),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();
    Ok(Self {
      login_delay_ms: parse_var(LOGIN_DELAY_ENV)?.unwrap_or(defaults.login_delay_ms),
      report_delay_ms: parse_var(REPORT_DELAY_ENV)?.unwrap_or(defaults.report_delay_ms),
      log_filter: env::var(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
      log_format: parse_var(LOG_FORMAT_ENV)?.unwrap_or(defaults.log_format),
    })
  }

  pub fn login_delay(&self) -> Duration {
    Duration::from_millis(self.login_delay_ms)
  }

  pub fn report_delay(&self) -> Duration {
    Duration::from_millis(self.report_delay_ms)
  }
}

/// `Ok(None)` when unset, `Err` when set but unparseable
fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
  match env::var(key) {
    Ok(raw) => raw
      .trim()
      .parse()
      .map(Some)
      .map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: raw,
      }),
    Err(_) => Ok(None),
  }
}
