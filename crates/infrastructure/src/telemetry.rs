//! Log initialisation
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence
//! over the built-in filter.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str =
    "weather_dashboard=info,presentation_http=info,application=info,infrastructure=info,integration_openweather=info,tower_http=info";

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Unknown value for `server.log_format`
    #[error("Invalid log format: {0}. Use 'text' or 'json'")]
    InvalidFormat(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(TelemetryError::InvalidFormat(s.to_string())),
        }
    }
}

/// Install the global subscriber
pub fn init_logging(format: LogFormat) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}
