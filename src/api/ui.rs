//! Frontend asset routes
//!
//! Serves the frontend entry document and auxiliary files from the
//! configured static directory. `/` resolves to `index.html`; paths with
//! no matching file return 404.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;

use crate::AppState;

/// Build frontend asset routes
pub fn ui_routes(static_dir: &Path) -> Router<AppState> {
    Router::new().fallback_service(ServeDir::new(static_dir))
}
