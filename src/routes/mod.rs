//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the auth API and serves the compiled client bundle under
//! a single Axum router. Unknown paths fall back to `index.html` so the
//! client router owns every non-API URL, including protected ones.

pub mod auth;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Auth API routes plus the health probe.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes + single-page client bundle from `site_dir`.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let index = ServeFile::new(site_dir.join("index.html"));
    let site = ServeDir::new(site_dir).fallback(index);

    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
