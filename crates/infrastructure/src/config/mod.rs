//! Application configuration
//!
//! Layered: built-in defaults, then an optional `config.toml`, then
//! `WEATHER_DASHBOARD_*` variables, then the two plain variables the
//! deployment contract names (`PORT`, `OPENWEATHER_API_KEY`).

mod openweather;
mod server;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use openweather::OpenWeatherAppConfig;
pub use server::ServerConfig;

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "WEATHER_DASHBOARD";

/// Plain variable overriding `server.port`
pub const PORT_VAR: &str = "PORT";

/// Plain variable overriding `openweather.api_key`
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream provider configuration
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(std::env::vars().collect(), Some("config"))
    }

    /// Load configuration from an explicit variable map and optional file
    ///
    /// `file` is a path without extension, as accepted by
    /// [`config::File::with_name`]; a missing file is not an error.
    pub fn load_from(
        env: HashMap<String, String>,
        file: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let non_blank = |name: &str| {
            env.get(name)
                .filter(|value| !value.trim().is_empty())
                .cloned()
        };
        let port = non_blank(PORT_VAR);
        let api_key = non_blank(API_KEY_VAR);

        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "public")?
            .set_default("openweather.units", "metric")?;

        // Load from file if exists
        if let Some(file) = file {
            builder = builder.add_source(config::File::with_name(file).required(false));
        }

        let config = builder
            // Override with prefixed variables (e.g., WEATHER_DASHBOARD_SERVER__HOST)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .set_override_option("server.port", port)?
            .set_override_option("openweather.api_key", api_key)?
            .build()?;

        config.try_deserialize()
    }

    /// Whether an upstream API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.openweather.api_key().is_some()
    }
}
