//! HTTP service for the portfolio site
//!
//! Exposes the content repository as a JSON API under `/api` and serves the
//! built client for every other path.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod static_files;
pub mod telemetry;
pub mod validation;

pub use state::AppState;

use axum::Router;

/// Build the full application: API routes plus the static client
pub fn app(state: AppState, settings: &config::Settings) -> Router {
    static_files::with_static_files(routes::create_router(state), &settings.static_dir)
}
