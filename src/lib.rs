use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod grading;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;
pub mod validate;

use crate::store::DocumentStore;

/// Shared per-process context handed to every handler. The store client is
/// constructed once at startup and injected here rather than held in a
/// process global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Service metadata
        .route("/", get(handlers::meta::root))
        .route("/health", get(handlers::meta::health))
        // Surveys
        .route("/surveys", post(handlers::surveys::create))
        .route("/surveys/:survey_id", get(handlers::surveys::show))
        // Evaluations
        .route("/evaluations", post(handlers::evaluations::submit))
        // Global middleware
        .layer(axum::middleware::from_fn(middleware::cors::cross_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
