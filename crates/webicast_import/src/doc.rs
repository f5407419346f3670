// File: crates/webicast_import/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/import",
    responses(
        (status = 200, description = "Parsed webinar records",
         example = json!({
             "success": true,
             "count": 1,
             "webinars": [{
                 "id": "a2f0c7d8-1111-2222-3333-444455556666",
                 "webinarId": "WEB-001",
                 "name": "Digital Marketing Trends 2025",
                 "date": "2025-07-20",
                 "time": "10:00",
                 "presenter": {"name": "John Smith", "email": "john.smith@company.com", "phone": "+1-555-0101"},
                 "attendee": {"name": "Alice Johnson", "email": "alice.johnson@email.com", "phone": "+1-555-0201"},
                 "status": "pending"
             }]
         })
        ),
        (status = 400, description = "No file uploaded or workbook unreadable", body = String)
    )
)]
fn doc_import_webinars_handler() {}

#[utoipa::path(
    get,
    path = "/template",
    responses(
        (status = 200, description = "Sample workbook (.xlsx) with ten example rows"),
        (status = 500, description = "Workbook generation failed", body = String)
    )
)]
fn doc_template_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_import_webinars_handler, doc_template_handler),
    tags(
        (name = "Import", description = "Bulk webinar import from spreadsheets")
    ),
    servers(
        (url = "/api", description = "Webicast API server")
    )
)]
pub struct ImportApiDoc;
