// File: crates/webicast_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::ScheduleRequest;
use crate::logic::MeetingResult;
use webicast_common::{Contact, Webinar, WebinarStatus};

#[utoipa::path(
    post,
    path = "/schedule-google-meet",
    request_body(content = ScheduleRequest, example = json!({
        "webinar": {
            "webinarId": "WEB-001",
            "name": "Digital Marketing Trends 2025",
            "date": "2025-07-20",
            "time": "10:00",
            "presenter": {"name": "John Smith", "email": "john.smith@company.com"},
            "attendee": {"name": "Alice Johnson", "email": "alice.johnson@email.com"}
        }
    })),
    responses(
        (status = 200, description = "Meeting provisioned (real or demo)",
         example = json!({
             "success": true,
             "message": "Google Meet webinar scheduled successfully",
             "mode": "demo",
             "platform": "Google Meet",
             "meetingId": "meet-WEB-001-1750000000000",
             "presenterLink": "https://meet.google.com/meet-WEB-001-1750000000000",
             "attendeeLink": "https://meet.google.com/meet-WEB-001-1750000000000",
             "calendarEventId": "cal-meet-WEB-001-1750000000000",
             "status": "scheduled (demo)",
             "startTime": "2025-07-20T10:00:00Z",
             "endTime": "2025-07-20T11:00:00Z",
             "htmlLink": "https://calendar.google.com/calendar/event?eid=meet-WEB-001-1750000000000"
         })
        ),
        (status = 400, description = "Missing fields or malformed date/time", body = String),
        (status = 503, description = "GCal service disabled", body = String)
    )
)]
fn doc_schedule_google_meet_handler() {}

#[utoipa::path(
    get,
    path = "/auth/status",
    responses(
        (status = 200, description = "OAuth credential status",
         example = json!({
             "isConfigured": true,
             "hasRefreshToken": false,
             "canCreateMeetings": false
         })
        )
    )
)]
fn doc_auth_status_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_schedule_google_meet_handler, doc_auth_status_handler),
    components(schemas(Webinar, Contact, WebinarStatus, MeetingResult, ScheduleRequest)),
    tags(
        (name = "GCal", description = "Google Meet provisioning API")
    ),
    servers(
        (url = "/api", description = "Webicast API server")
    )
)]
pub struct GcalApiDoc;
