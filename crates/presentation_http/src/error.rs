//! API error handling
//!
//! Every failure leaves the facade as a `{ "error", "message" }` body. The
//! labels are part of the frontend contract and never carry upstream detail.

use std::fmt;

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Which endpoint family produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `/api/weather/{city}`
    Weather,
    /// `/api/forecast/{city}`
    Forecast,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weather => write!(f, "weather"),
            Self::Forecast => write!(f, "forecast"),
        }
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    #[error("No {resource} data for city: {city}")]
    CityNotFound { resource: Resource, city: String },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("API route {0} not found")]
    RouteNotFound(String),

    /// Any other failure while serving a weather or forecast request
    #[error("Failed to fetch {resource} data: {detail}")]
    Upstream { resource: Resource, detail: String },

    /// A handler panicked
    #[error("Unhandled failure: {0}")]
    Unhandled(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short label
    pub error: String,
    /// Human-readable explanation
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

impl ApiError {
    /// Translate a use-case failure for the given endpoint family
    #[must_use]
    pub fn from_application(err: ApplicationError, resource: Resource) -> Self {
        match err {
            ApplicationError::Configuration(_) => Self::ApiKeyNotConfigured,
            ApplicationError::CityNotFound { city } => Self::CityNotFound { resource, city },
            ApplicationError::NotAuthorized(_) => Self::InvalidApiKey,
            e @ (ApplicationError::ExternalService(_) | ApplicationError::Internal(_)) => {
                Self::Upstream {
                    resource,
                    detail: e.to_string(),
                }
            },
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::CityNotFound { .. } | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::ApiKeyNotConfigured | Self::Upstream { .. } | Self::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Body sent to the client
    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        match self {
            Self::ApiKeyNotConfigured => ErrorResponse::new(
                "API key not configured",
                "Please set OPENWEATHER_API_KEY environment variable",
            ),
            Self::CityNotFound { resource, city } => ErrorResponse::new(
                "City not found",
                format!("Could not find {resource} data for city: {city}"),
            ),
            Self::InvalidApiKey => ErrorResponse::new(
                "Invalid API key",
                "Please check your OpenWeatherMap API key",
            ),
            Self::RouteNotFound(uri) => {
                ErrorResponse::new("API endpoint not found", format!("API route {uri} not found"))
            },
            Self::Upstream { resource, .. } => ErrorResponse::new(
                "Internal server error",
                format!("Failed to fetch {resource} data"),
            ),
            Self::Unhandled(_) => {
                ErrorResponse::new("Internal server error", "Something went wrong!")
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Upstream { detail, .. } | Self::Unhandled(detail) = &self {
            error!(error = %detail, "Request failed");
        }

        (self.status(), Json(self.body())).into_response()
    }
}
