//! In-memory CRUD service for a single "games" resource.

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub use database::store::GameStore;
pub use state::AppState;

/// Build the application router over the given state.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(handlers::health::root_handler))
        .route("/health", get(handlers::health::health_check))
        .nest("/games", routes::games::routes())
        .fallback(handlers::fallback::not_found)
        // Applies only to routes registered above it
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
