//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/cities", city_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// City and point of interest routes
fn city_routes() -> Router<AppState> {
    use handlers::{cities, points_of_interest as poi};

    Router::new()
        .route("/", get(cities::list_cities))
        .route("/{city_id}", get(cities::get_city))
        .route(
            "/{city_id}/pointsofinterest",
            get(poi::list_points_of_interest).post(poi::create_point_of_interest),
        )
        .route(
            "/{city_id}/pointsofinterest/{id}",
            get(poi::get_point_of_interest)
                .put(poi::replace_point_of_interest)
                .patch(poi::patch_point_of_interest)
                .delete(poi::delete_point_of_interest),
        )
}
