//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Required configuration is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider has no data for the requested city
    #[error("City not found: {city}")]
    CityNotFound { city: String },

    /// The provider rejected our credentials
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
