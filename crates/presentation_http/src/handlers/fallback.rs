//! Handlers for unmatched API routes and panicking handlers

use std::any::Any;

use axum::{
    extract::OriginalUri,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::ApiError;

/// Any unmatched path under `/api`
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    let route = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    warn!(route = %route, "Unknown API route");
    ApiError::RouteNotFound(route)
}

/// Convert a caught panic into the generic 500 body
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());

    ApiError::Unhandled(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn panic_payload_becomes_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_route_keeps_query() {
        let uri: axum::http::Uri = "/api/nope?units=imperial".parse().unwrap();
        let err = api_not_found(OriginalUri(uri)).await;
        assert_eq!(err.body().message, "API route /api/nope?units=imperial not found");
    }
}
