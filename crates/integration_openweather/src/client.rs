//! OpenWeatherMap HTTP client
//!
//! Issues the two GET requests the dashboard needs. Every call is a single
//! attempt; retries and caching are left to callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{RawCurrentConditions, RawForecastResponse};

/// OpenWeatherMap client errors
///
/// Request-level variants carry the city the caller asked for.
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// No API key was supplied, so no request was sent
    #[error("API key is empty")]
    MissingApiKey,

    /// The provider rejected the API key
    #[error("Provider rejected the API key for city: {city}")]
    Unauthorized { city: String },

    /// The provider has no data for the city
    #[error("City not found: {city}")]
    NotFound { city: String },

    /// Network failure, timeout or provider 5xx
    #[error("Provider unavailable for city {city}: {reason}")]
    Unavailable { city: String, reason: String },

    /// Any other non-success status
    #[error("Unexpected provider status {status} for city: {city}")]
    UnexpectedStatus { city: String, status: u16 },

    /// The response body did not match the expected shape
    #[error("Failed to decode provider response for city {city}: {reason}")]
    Decode { city: String, reason: String },

    /// The HTTP client could not be built
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl OpenWeatherError {
    /// City the failed request was made for, if any
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { city }
            | Self::NotFound { city }
            | Self::Unavailable { city, .. }
            | Self::UnexpectedStatus { city, .. }
            | Self::Decode { city, .. } => Some(city),
            Self::MissingApiKey | Self::ClientInit(_) => None,
        }
    }
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unit system requested from the provider (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds; unset leaves the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            units: default_units(),
            timeout_secs: None,
        }
    }
}

/// Access to the provider's current-conditions and forecast endpoints
#[async_trait]
pub trait OpenWeatherApi: Send + Sync {
    /// Fetch current conditions for a city
    async fn fetch_current(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<RawCurrentConditions, OpenWeatherError>;

    /// Fetch the 5 day / 3 hour forecast for a city
    async fn fetch_forecast(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<RawForecastResponse, OpenWeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| OpenWeatherError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a provider status code to an error, if it is not a success
    fn check_status(status: StatusCode, city: &str) -> Result<(), OpenWeatherError> {
        let city = city.to_string();
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(OpenWeatherError::Unauthorized { city }),
            StatusCode::NOT_FOUND => Err(OpenWeatherError::NotFound { city }),
            s if s.is_server_error() => Err(OpenWeatherError::Unavailable {
                city,
                reason: format!("HTTP {s}"),
            }),
            s => Err(OpenWeatherError::UnexpectedStatus {
                city,
                status: s.as_u16(),
            }),
        }
    }

    /// Send one GET to `endpoint` and decode the body into `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        api_key: &str,
    ) -> Result<T, OpenWeatherError> {
        if api_key.trim().is_empty() {
            return Err(OpenWeatherError::MissingApiKey);
        }

        debug!(endpoint, "Requesting OpenWeatherMap");

        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| OpenWeatherError::Unavailable {
                city: city.to_string(),
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if let Err(e) = Self::check_status(status, city) {
            warn!(endpoint, status = %status, "OpenWeatherMap returned an error status");
            return Err(e);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OpenWeatherError::Unavailable {
                city: city.to_string(),
                reason: e.without_url().to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| OpenWeatherError::Decode {
            city: city.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl OpenWeatherApi for OpenWeatherClient {
    #[instrument(skip(self, api_key))]
    async fn fetch_current(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<RawCurrentConditions, OpenWeatherError> {
        self.get_json("weather", city, api_key).await
    }

    #[instrument(skip(self, api_key))]
    async fn fetch_forecast(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<RawForecastResponse, OpenWeatherError> {
        self.get_json("forecast", city, api_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenWeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.units, "metric");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_config_deserialize_fills_defaults() {
        let config: OpenWeatherConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.units, "metric");
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = OpenWeatherClient::new(OpenWeatherConfig {
            base_url: "http://localhost:9000/data/2.5/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint_url("weather"),
            "http://localhost:9000/data/2.5/weather"
        );
    }

    #[test]
    fn test_check_status_mapping() {
        assert!(OpenWeatherClient::check_status(StatusCode::OK, "Oslo").is_ok());
        assert!(matches!(
            OpenWeatherClient::check_status(StatusCode::UNAUTHORIZED, "Oslo"),
            Err(OpenWeatherError::Unauthorized { city }) if city == "Oslo"
        ));
        assert!(matches!(
            OpenWeatherClient::check_status(StatusCode::NOT_FOUND, "Oslo"),
            Err(OpenWeatherError::NotFound { .. })
        ));
        assert!(matches!(
            OpenWeatherClient::check_status(StatusCode::BAD_GATEWAY, "Oslo"),
            Err(OpenWeatherError::Unavailable { .. })
        ));
        assert!(matches!(
            OpenWeatherClient::check_status(StatusCode::TOO_MANY_REQUESTS, "Oslo"),
            Err(OpenWeatherError::UnexpectedStatus { status: 429, .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = OpenWeatherError::NotFound {
            city: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "City not found: Atlantis");
        assert_eq!(OpenWeatherError::MissingApiKey.to_string(), "API key is empty");
    }

    #[tokio::test]
    async fn test_empty_api_key_is_rejected_before_request() {
        let client = OpenWeatherClient::new(OpenWeatherConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .unwrap();

        let result = client.fetch_current("London", "  ").await;
        assert!(matches!(result, Err(OpenWeatherError::MissingApiKey)));
    }
}
