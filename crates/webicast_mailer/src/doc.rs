// File: crates/webicast_mailer/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::dispatch::{EmailDispatchReceipt, NotificationResult};
use crate::handlers::NotifyRequest;

#[utoipa::path(
    post,
    path = "/send-notifications",
    request_body(content = NotifyRequest, example = json!({
        "webinar": {
            "webinarId": "WEB-001",
            "name": "Digital Marketing Trends 2025",
            "date": "2025-07-20",
            "time": "10:00",
            "presenter": {"name": "John Smith", "email": "john.smith@company.com"},
            "attendee": {"name": "Alice Johnson", "email": "alice.johnson@email.com"},
            "presenterLink": "https://meet.google.com/abc-defg-hij",
            "attendeeLink": "https://meet.google.com/abc-defg-hij"
        }
    })),
    responses(
        (status = 200, description = "Both emails sent", body = NotificationResult,
         example = json!({
             "success": true,
             "message": "Email notifications sent successfully",
             "presenterEmailData": {
                 "to": "john.smith@company.com",
                 "messageId": "<4f7c5a8e@webicast>",
                 "sent": true,
                 "timestamp": "2025-07-19T09:00:00Z",
                 "type": "presenter"
             },
             "attendeeEmailData": {
                 "to": "alice.johnson@email.com",
                 "messageId": "<9b2d1c3f@webicast>",
                 "sent": true,
                 "timestamp": "2025-07-19T09:00:00Z",
                 "type": "attendee"
             }
         })
        ),
        (status = 400, description = "Webinar not provisioned yet", body = String),
        (status = 500, description = "Configuration missing or delivery failed", body = String)
    )
)]
fn doc_send_notifications_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_send_notifications_handler),
    components(schemas(NotifyRequest, NotificationResult, EmailDispatchReceipt)),
    tags(
        (name = "Mailer", description = "Webinar invitation emails")
    ),
    servers(
        (url = "/api", description = "Webicast API server")
    )
)]
pub struct MailerApiDoc;
