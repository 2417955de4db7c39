//! Provider payload to view model mapping
//!
//! Pure functions: no I/O, no clock reads, no hidden state. The generation
//! timestamp is passed in by the caller so the same input always maps to
//! the same output.

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use domain::{
    CurrentWeather, DailyTemperature, ForecastDay, ForecastReport, Humidity, Temperature,
    WeatherSummary, Wind,
    units::{meters_to_km, ms_to_kmh, round_to_i32},
};

use crate::models::{RawCondition, RawCurrentConditions, RawForecastEntry, RawForecastResponse};

impl From<&RawCondition> for WeatherSummary {
    fn from(condition: &RawCondition) -> Self {
        Self {
            main: condition.main.clone(),
            description: condition.description.clone(),
            icon: condition.icon.clone(),
        }
    }
}

/// Format a unix timestamp as `HH:MM:SS` on the city's local clock.
///
/// Falls back to UTC when the offset is missing or invalid.
fn local_time_of_day(timestamp: i64, utc_offset_secs: Option<i32>) -> String {
    let offset = utc_offset_secs
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());

    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.with_timezone(&offset).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Map current conditions to the dashboard view model
#[must_use]
pub fn to_current_weather(
    raw: &RawCurrentConditions,
    generated_at: DateTime<Utc>,
) -> CurrentWeather {
    CurrentWeather {
        city: raw.name.clone(),
        country: raw.sys.country.clone(),
        temperature: Temperature {
            current: round_to_i32(raw.main.temp),
            feels_like: round_to_i32(raw.main.feels_like),
            min: round_to_i32(raw.main.temp_min),
            max: round_to_i32(raw.main.temp_max),
        },
        humidity: Humidity::from_reading(raw.main.humidity),
        pressure: raw.main.pressure,
        visibility: raw.visibility.map(meters_to_km),
        weather: WeatherSummary::from(&raw.condition),
        wind: Wind {
            speed: ms_to_kmh(raw.wind.speed),
            direction: raw.wind.deg,
        },
        sunrise: local_time_of_day(raw.sys.sunrise, raw.timezone),
        sunset: local_time_of_day(raw.sys.sunset, raw.timezone),
        timestamp: generated_at,
    }
}

/// Whether a forecast timestamp falls exactly on 12:00:00 of the
/// provider's clock (UTC, the clock its `dt_txt` labels are printed in)
#[must_use]
pub fn is_provider_noon(timestamp: i64) -> bool {
    DateTime::from_timestamp(timestamp, 0)
        .is_some_and(|t| t.hour() == 12 && t.minute() == 0 && t.second() == 0)
}

fn to_forecast_day(entry: &RawForecastEntry) -> Option<ForecastDay> {
    let at = DateTime::from_timestamp(entry.dt, 0)?;

    Some(ForecastDay {
        date: at.date_naive(),
        day: at.format("%a").to_string(),
        temperature: DailyTemperature {
            min: round_to_i32(entry.main.temp_min),
            max: round_to_i32(entry.main.temp_max),
            current: round_to_i32(entry.main.temp),
        },
        weather: WeatherSummary::from(&entry.condition),
        humidity: Humidity::from_reading(entry.main.humidity),
        wind: ms_to_kmh(entry.wind.speed),
    })
}

/// Reduce 3-hour forecast steps to one entry per day.
///
/// Keeps the noon entries in ascending time order and caps the result at
/// [`ForecastReport::MAX_DAYS`]. Fewer noon entries give a shorter result.
#[must_use]
pub fn to_forecast_days(entries: &[RawForecastEntry]) -> Vec<ForecastDay> {
    let mut noon: Vec<&RawForecastEntry> =
        entries.iter().filter(|e| is_provider_noon(e.dt)).collect();
    noon.sort_by_key(|e| e.dt);
    noon.dedup_by_key(|e| e.dt);

    noon.into_iter()
        .filter_map(to_forecast_day)
        .take(ForecastReport::MAX_DAYS)
        .collect()
}

/// Map a forecast response to the dashboard view model
#[must_use]
pub fn to_forecast_report(
    raw: &RawForecastResponse,
    generated_at: DateTime<Utc>,
) -> ForecastReport {
    ForecastReport {
        city: raw.city.name.clone(),
        country: raw.city.country.clone(),
        forecast: to_forecast_days(&raw.list),
        timestamp: generated_at,
    }
}
