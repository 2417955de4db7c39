//! Upstream weather provider configuration.

use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeatherMap configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// Provider API key (sensitive - uses SecretString).
    /// The `OPENWEATHER_API_KEY` variable overrides this.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unit system requested from the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds; unset keeps the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for OpenWeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAppConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    OpenWeatherConfig::default().base_url
}

fn default_units() -> String {
    OpenWeatherConfig::default().units
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            units: default_units(),
            timeout_secs: None,
        }
    }
}

impl OpenWeatherAppConfig {
    /// The API key, if one is set and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
    }

    /// Settings for the HTTP client
    #[must_use]
    pub fn client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            units: self.units.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
