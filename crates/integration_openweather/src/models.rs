//! OpenWeatherMap wire models
//!
//! Typed payloads for the `/weather` and `/forecast` endpoints, requested with
//! `units=metric`. Only the fields the dashboard uses are declared; anything
//! else in the payload is ignored.

use serde::{Deserialize, Deserializer, de};

/// A single weather condition as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCondition {
    /// Condition group
    pub main: String,
    /// Condition description
    pub description: String,
    /// Icon id
    pub icon: String,
}

/// Main measurement block shared by current conditions and forecast entries
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMain {
    /// Temperature in °C
    pub temp: f64,
    /// Apparent temperature in °C
    pub feels_like: f64,
    /// Minimum observed temperature in °C
    pub temp_min: f64,
    /// Maximum observed temperature in °C
    pub temp_max: f64,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Relative humidity in percent
    pub humidity: u8,
}

/// Wind block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWind {
    /// Speed in m/s
    pub speed: f64,
    /// Direction in degrees
    #[serde(default)]
    pub deg: u16,
}

/// System block of the current conditions payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSys {
    /// ISO 3166 country code
    #[serde(default)]
    pub country: String,
    /// Sunrise, unix seconds
    pub sunrise: i64,
    /// Sunset, unix seconds
    pub sunset: i64,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCurrentConditions {
    /// City name as resolved by the provider
    pub name: String,
    /// Observation time, unix seconds
    pub dt: i64,
    pub main: RawMain,
    /// The most significant of the reported conditions
    #[serde(rename = "weather", deserialize_with = "primary_condition")]
    pub condition: RawCondition,
    pub wind: RawWind,
    /// Visibility in metres, omitted by the provider when unknown
    #[serde(default)]
    pub visibility: Option<u32>,
    pub sys: RawSys,
    /// Shift from UTC in seconds for the city
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// One 3-hour step of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastEntry {
    /// Forecast time, unix seconds
    pub dt: i64,
    pub main: RawMain,
    #[serde(rename = "weather", deserialize_with = "primary_condition")]
    pub condition: RawCondition,
    pub wind: RawWind,
}

/// City metadata of the forecast payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCity {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastResponse {
    /// Forecast steps, normally three hours apart over five days
    pub list: Vec<RawForecastEntry>,
    pub city: RawCity,
}

/// The provider lists conditions most significant first; keep only the head.
fn primary_condition<'de, D>(deserializer: D) -> Result<RawCondition, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawCondition>::deserialize(deserializer)?
        .into_iter()
        .next()
        .ok_or_else(|| de::Error::invalid_length(0, &"at least one weather condition"))
}
