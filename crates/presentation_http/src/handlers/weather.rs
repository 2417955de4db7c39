//! Weather and forecast handlers

use axum::{
    Json,
    extract::{Path, State},
};
use domain::{CurrentWeather, ForecastReport};
use tracing::instrument;

use crate::{
    error::{ApiError, Resource},
    state::AppState,
};

/// `GET /api/weather/{city}`
///
/// The city segment is percent-decoded by the extractor and forwarded as-is.
#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<CurrentWeather>, ApiError> {
    state
        .weather_service
        .current_weather(&city)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_application(e, Resource::Weather))
}

/// `GET /api/forecast/{city}`
#[instrument(skip(state))]
pub async fn forecast(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<ForecastReport>, ApiError> {
    state
        .weather_service
        .forecast(&city)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_application(e, Resource::Forecast))
}
