//! Weather view models
//!
//! Simplified, unit-normalized shapes returned to dashboard clients.
//! Temperatures are whole degrees Celsius, wind speeds whole km/h.
//! Every model carries a generation timestamp that is independent of
//! any provider timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Humidity;

/// The condition surfaced for a reading (the provider's most significant one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Condition group, e.g. "Rain"
    pub main: String,
    /// Human readable description, e.g. "light rain"
    pub description: String,
    /// Provider icon id, e.g. "10d"
    pub icon: String,
}

/// Current temperature readings in whole degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub current: i32,
    pub feels_like: i32,
    pub min: i32,
    pub max: i32,
}

/// Wind reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    /// Speed in km/h
    pub speed: i32,
    /// Meteorological direction in degrees
    pub direction: u16,
}

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    /// ISO 3166 country code
    pub country: String,
    pub temperature: Temperature,
    pub humidity: Humidity,
    /// Pressure in hPa
    pub pressure: u32,
    /// Visibility in km; `None` when the provider did not report it
    pub visibility: Option<u32>,
    pub weather: WeatherSummary,
    pub wind: Wind,
    /// Local sunrise time, `HH:MM:SS`
    pub sunrise: String,
    /// Local sunset time, `HH:MM:SS`
    pub sunset: String,
    /// When this view model was generated
    pub timestamp: DateTime<Utc>,
}

/// Temperatures for a forecast day in whole degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTemperature {
    pub min: i32,
    pub max: i32,
    pub current: i32,
}

/// One forecast entry per calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date of the entry, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Abbreviated English weekday, e.g. "Mon"
    pub day: String,
    pub temperature: DailyTemperature,
    pub weather: WeatherSummary,
    pub humidity: Humidity,
    /// Wind speed in km/h
    pub wind: i32,
}

/// Forecast response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub city: String,
    pub country: String,
    /// At most five days, in chronological order
    pub forecast: Vec<ForecastDay>,
    /// When this view model was generated
    pub timestamp: DateTime<Utc>,
}

impl ForecastReport {
    /// Maximum number of days in a report
    pub const MAX_DAYS: usize = 5;
}
