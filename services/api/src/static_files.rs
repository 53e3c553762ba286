//! Serving the built single-page client

use std::path::Path;

use axum::{
    Router,
    http::{HeaderValue, header},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeader,
};
use tracing::{info, warn};

/// Fingerprinted assets never change under the same name
const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Serve `dir` for every route the router does not handle
///
/// Paths without a matching file fall back to `index.html` so client-side
/// routes resolve. When `dir` does not exist the router is returned unchanged.
pub fn with_static_files(router: Router, dir: &Path) -> Router {
    if !dir.is_dir() {
        warn!(
            "Build directory not found at {}, serving the API only",
            dir.display()
        );
        return router;
    }

    info!("Serving client from {}", dir.display());

    let index = SetResponseHeader::overriding(
        ServeFile::new(dir.join("index.html")),
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    );

    let assets = SetResponseHeader::if_not_present(
        ServeDir::new(dir).fallback(index),
        header::CACHE_CONTROL,
        HeaderValue::from_static(ASSET_CACHE_CONTROL),
    );

    router.fallback_service(assets)
}
