// --- File: crates/webicast_flow/src/routes.rs ---

use crate::handlers::{bulk_flow_handler, run_flow_handler, FlowState};
use axum::{routing::post, Router};
use std::sync::Arc;
use webicast_config::AppConfig;
use webicast_gcal::handlers::GcalState;

/// Creates a router for the scheduling pipeline. Shares the GCal state
/// so both entry points use the same Calendar hub. Nested under `/api`
/// by the backend.
pub fn routes(config: Arc<AppConfig>, gcal: Arc<GcalState>) -> Router {
    let state = Arc::new(FlowState { config, gcal });
    Router::new()
        .route("/flow/run", post(run_flow_handler))
        .route("/flow/bulk", post(bulk_flow_handler))
        .with_state(state)
}
