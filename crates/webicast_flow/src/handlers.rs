// File: crates/webicast_flow/src/handlers.rs
use crate::logic::{run_bulk, run_flow, FlowOutcome};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use webicast_common::{IntoHttpResponse, Webinar, WebicastError};
use webicast_config::AppConfig;
use webicast_gcal::handlers::GcalState;

// Define shared state needed by flow handlers
#[derive(Clone)]
pub struct FlowState {
    pub config: Arc<AppConfig>,
    pub gcal: Arc<GcalState>,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FlowRequest {
    pub webinar: Webinar,
    /// Send the invitation emails after provisioning. Defaults to true.
    #[serde(default = "default_true")]
    pub send_notifications: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BulkFlowRequest {
    pub webinars: Vec<Webinar>,
    /// Bulk runs default to provisioning only.
    #[serde(default)]
    pub send_notifications: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BulkFlowResponse {
    pub success: bool,
    pub scheduled: usize,
    pub failed: usize,
    pub results: Vec<FlowOutcome>,
}

/// Handler running the full pipeline for one webinar.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/flow/run", // Path relative to /api
    request_body = FlowRequest,
    responses(
        (status = 200, description = "Pipeline outcome (success flag inside)"),
        (status = 503, description = "GCal service disabled")
    ),
    tag = "Flow"
))]
pub async fn run_flow_handler(
    State(state): State<Arc<FlowState>>,
    Json(payload): Json<FlowRequest>,
) -> Result<Json<FlowOutcome>, (StatusCode, String)> {
    if !state.config.use_gcal {
        return Err(WebicastError::ServiceDisabled("GCal").into_http_response());
    }

    let outcome = run_flow(
        &state.config,
        state.gcal.calendar_hub.as_deref(),
        payload.webinar,
        payload.send_notifications,
    )
    .await;
    Ok(Json(outcome))
}

/// Handler running the pipeline for an uploaded sequence of webinars.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/flow/bulk", // Path relative to /api
    request_body = BulkFlowRequest,
    responses(
        (status = 200, description = "Per-record outcomes, input order preserved"),
        (status = 503, description = "GCal service disabled")
    ),
    tag = "Flow"
))]
pub async fn bulk_flow_handler(
    State(state): State<Arc<FlowState>>,
    Json(payload): Json<BulkFlowRequest>,
) -> Result<Json<BulkFlowResponse>, (StatusCode, String)> {
    if !state.config.use_gcal {
        return Err(WebicastError::ServiceDisabled("GCal").into_http_response());
    }

    let results = run_bulk(
        &state.config,
        state.gcal.calendar_hub.as_deref(),
        payload.webinars,
        payload.send_notifications,
    )
    .await;

    let scheduled = results.iter().filter(|r| r.success).count();
    let failed = results.len() - scheduled;
    Ok(Json(BulkFlowResponse {
        success: failed == 0,
        scheduled,
        failed,
        results,
    }))
}
