//! colloquy-server
//!
//! HTTP front for the persona chat routes and the visualization payload
//! ingest endpoints. Runs as a plain TCP server or, when deployed, under
//! AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod resolve;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use colloquy_core::base_path::base_path_for;
use colloquy_core::route_paths;

use state::AppState;

/// Build the application router.
///
/// In production every route, static asset included, lives under the
/// deployment base path; anything outside it gets the not-found page.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let pages = Router::new()
        .route("/", get(routes::chat::index))
        .route(route_paths::HEALTH, get(routes::health::health_check))
        .route("/chat/{persona_id}", get(routes::chat::new_conversation))
        .route(
            "/chat/{persona_id}/{conversation_id}",
            get(routes::chat::conversation),
        )
        .route(route_paths::PERSONAS_API, get(routes::personas::list_personas))
        .route(
            route_paths::CHART_VALIDATE_API,
            post(routes::charts::validate_chart),
        )
        .route(
            route_paths::NETWORK_VALIDATE_API,
            post(routes::charts::validate_network),
        )
        .nest_service(route_paths::STATIC_PREFIX, ServeDir::new(static_dir));

    let base_path = base_path_for(state.mode());
    let router = if base_path.is_empty() {
        pages
    } else {
        Router::new().nest(base_path, pages)
    };

    router
        .fallback(routes::chat::not_found)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
