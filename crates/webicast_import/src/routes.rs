// --- File: crates/webicast_import/src/routes.rs ---

use crate::handlers::{import_webinars_handler, template_handler};
use axum::{
    routing::{get, post},
    Router,
};

/// Creates a router for spreadsheet import/export. Stateless; nested
/// under `/api` by the backend.
pub fn routes() -> Router {
    Router::new()
        .route("/import", post(import_webinars_handler))
        .route("/template", get(template_handler))
}
