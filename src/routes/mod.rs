//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One API route (`GET /path`) bridges to the solver. Everything else is
//! looked up in the static directory (page, wasm bundle, map image, overlay
//! CSV). The server root holds the solver, its grid data and `.env`, and is
//! not reachable over HTTP.

pub mod path;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: API routes plus the static directory.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/path", get(path::find_path))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    let slots = state.solver.slots();
    Json(serde_json::json!({
        "ok": true,
        "solver_slots": slots.capacity(),
        "solver_slots_free": slots.available(),
    }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
