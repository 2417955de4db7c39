//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-level
//! concerns: configuration loading and log initialisation.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::OpenWeatherAdapter;
pub use config::{AppConfig, OpenWeatherAppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_logging};
