//! Weather service - current conditions and daily forecast use cases
//!
//! Gates every call on a configured API key and stamps each view model
//! with its generation time. Requests are independent: no caching, no
//! coalescing of concurrent lookups for the same city.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::{CurrentWeather, ForecastReport};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Message used when no provider key has been configured
const API_KEY_NOT_CONFIGURED: &str = "API key not configured";

/// Use cases behind the weather and forecast endpoints
pub struct WeatherService {
    provider: Arc<dyn WeatherPort>,
    api_key: Option<SecretString>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &"dyn WeatherPort")
            .field("api_key_configured", &self.is_configured())
            .finish()
    }
}

impl WeatherService {
    /// Create a new service. An empty key is treated as absent.
    pub fn new(provider: Arc<dyn WeatherPort>, api_key: Option<SecretString>) -> Self {
        let api_key = api_key.filter(|key| !key.expose_secret().trim().is_empty());
        Self { provider, api_key }
    }

    /// Whether an API key is available for upstream calls
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, ApplicationError> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .ok_or_else(|| {
                warn!("Weather request rejected: OPENWEATHER_API_KEY is not set");
                ApplicationError::Configuration(API_KEY_NOT_CONFIGURED.to_string())
            })
    }

    /// Current conditions for a city
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather, ApplicationError> {
        let api_key = self.api_key()?;
        let weather = self
            .provider
            .current_weather(city, api_key, Utc::now())
            .await?;
        debug!(resolved_city = %weather.city, "Current weather fetched");
        Ok(weather)
    }

    /// Daily forecast for a city
    #[instrument(skip(self))]
    pub async fn forecast(&self, city: &str) -> Result<ForecastReport, ApplicationError> {
        let api_key = self.api_key()?;
        let report = self.provider.forecast(city, api_key, Utc::now()).await?;
        debug!(days = report.forecast.len(), "Forecast fetched");
        Ok(report)
    }
}
