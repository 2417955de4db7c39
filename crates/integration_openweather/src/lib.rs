//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap REST API (<https://openweathermap.org/api>)
//! plus the pure mapping from provider payloads to dashboard view models.
//! Payloads are decoded into typed structs at the client boundary, so the
//! mapper itself cannot fail.

pub mod client;
pub mod mapper;
pub mod models;

pub use client::{OpenWeatherApi, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
pub use mapper::{is_provider_noon, to_current_weather, to_forecast_days, to_forecast_report};
pub use models::{
    RawCity, RawCondition, RawCurrentConditions, RawForecastEntry, RawForecastResponse, RawMain,
    RawSys, RawWind,
};
