//! Route definitions

use axum::{Router, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Unmatched `/api` paths get a JSON 404; everything else outside the API
/// is looked up in the static directory.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/weather/{city}", get(handlers::weather::current_weather))
        .route("/forecast/{city}", get(handlers::weather::forecast))
        .fallback(handlers::fallback::api_not_found);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .nest("/api", api)
        // Frontend
        .fallback_service(static_files)
        .layer(CatchPanicLayer::custom(handlers::fallback::handle_panic))
        // Attach state
        .with_state(state)
}
