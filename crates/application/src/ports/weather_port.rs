//! Weather provider port
//!
//! Defines the interface for fetching weather data already shaped into
//! dashboard view models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{CurrentWeather, ForecastReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
///
/// Implementations make exactly one upstream attempt per call and stamp
/// the returned view model with `generated_at`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions for a city
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Daily forecast (one entry per day, at most five) for a city
    async fn forecast(
        &self,
        city: &str,
        api_key: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<ForecastReport, ApplicationError>;
}
