//! Grievance classification HTTP API server (Axum).
//!
//! Endpoints: `POST /classify`, `POST /classify/batch`, `POST /explain`, `GET /health`.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use gc_core::GrievanceConfig;
use state::AppState;
use tower_http::trace::TraceLayer;

/// Build the application router from configuration.
pub fn app(config: &GrievanceConfig) -> anyhow::Result<Router> {
    Ok(app_with_state(AppState::from_config(config)?))
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::classify_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
