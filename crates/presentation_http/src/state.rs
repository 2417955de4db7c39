//! Application state shared across handlers

use std::{path::PathBuf, sync::Arc};

use application::WeatherService;

/// Shared application state
///
/// Holds no per-request data; concurrent requests share only read-only handles.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather and forecast use cases
    pub weather_service: Arc<WeatherService>,
    /// Directory the static frontend is served from
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new state
    pub fn new(weather_service: Arc<WeatherService>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            weather_service,
            static_dir: static_dir.into(),
        }
    }
}
