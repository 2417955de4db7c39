//! Weather dashboard HTTP presentation layer
//!
//! Serves the JSON API, the liveness endpoint and the static frontend.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, Resource};
pub use routes::create_router;
pub use state::AppState;
