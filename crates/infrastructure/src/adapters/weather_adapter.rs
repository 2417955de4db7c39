//! Weather adapter - Implements WeatherPort using integration_openweather

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{CurrentWeather, ForecastReport};
use integration_openweather::{
    OpenWeatherApi, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, to_current_weather,
    to_forecast_report,
};
use tracing::{error, instrument, warn};

/// Adapter for the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration error to application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::MissingApiKey => {
                ApplicationError::Configuration("API key not configured".into())
            },
            OpenWeatherError::NotFound { city } => {
                warn!(city = %city, "Provider has no data for city");
                ApplicationError::CityNotFound { city }
            },
            OpenWeatherError::Unauthorized { city } => {
                error!(city = %city, "Provider rejected the configured API key");
                ApplicationError::NotAuthorized("Provider rejected the API key".into())
            },
            e @ (OpenWeatherError::Unavailable { .. }
            | OpenWeatherError::UnexpectedStatus { .. }) => {
                error!(error = %e, "Weather provider request failed");
                ApplicationError::ExternalService(e.to_string())
            },
            e @ (OpenWeatherError::Decode { .. } | OpenWeatherError::ClientInit(_)) => {
                error!(error = %e, "Weather provider integration error");
                ApplicationError::Internal(e.to_string())
            },
        }
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self, api_key, generated_at))]
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<CurrentWeather, ApplicationError> {
        let raw = self
            .client
            .fetch_current(city, api_key)
            .await
            .map_err(Self::map_error)?;

        Ok(to_current_weather(&raw, generated_at))
    }

    #[instrument(skip(self, api_key, generated_at))]
    async fn forecast(
        &self,
        city: &str,
        api_key: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<ForecastReport, ApplicationError> {
        let raw = self
            .client
            .fetch_forecast(city, api_key)
            .await
            .map_err(Self::map_error)?;

        Ok(to_forecast_report(&raw, generated_at))
    }
}
