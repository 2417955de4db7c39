//! Domain layer for the weather dashboard
//!
//! Contains the unit-normalized view models served to clients and the
//! conversions used to build them. No I/O happens in this crate.

pub mod units;
pub mod value_objects;
pub mod weather;

pub use value_objects::Humidity;
pub use weather::{
    CurrentWeather, DailyTemperature, ForecastDay, ForecastReport, Temperature, WeatherSummary,
    Wind,
};
