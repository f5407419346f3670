// File: crates/webicast_flow/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{BulkFlowRequest, FlowRequest};
use crate::logic::FlowOutcome;

#[utoipa::path(
    post,
    path = "/flow/run",
    request_body(content = FlowRequest, example = json!({
        "webinar": {
            "webinarId": "WEB-001",
            "name": "Digital Marketing Trends 2025",
            "date": "2025-07-20",
            "time": "10:00",
            "presenter": {"name": "John Smith", "email": "john.smith@company.com"},
            "attendee": {"name": "Alice Johnson", "email": "alice.johnson@email.com"}
        },
        "sendNotifications": false
    })),
    responses(
        (status = 200, description = "Pipeline outcome", body = FlowOutcome),
        (status = 503, description = "GCal service disabled", body = String)
    )
)]
fn doc_run_flow_handler() {}

#[utoipa::path(
    post,
    path = "/flow/bulk",
    request_body = BulkFlowRequest,
    responses(
        (status = 200, description = "Per-record outcomes, input order preserved",
         example = json!({
             "success": false,
             "scheduled": 2,
             "failed": 1,
             "results": []
         })
        ),
        (status = 503, description = "GCal service disabled", body = String)
    )
)]
fn doc_bulk_flow_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_run_flow_handler, doc_bulk_flow_handler),
    components(schemas(FlowRequest, BulkFlowRequest, FlowOutcome)),
    tags(
        (name = "Flow", description = "Provision-and-notify pipeline")
    ),
    servers(
        (url = "/api", description = "Webicast API server")
    )
)]
pub struct FlowApiDoc;
