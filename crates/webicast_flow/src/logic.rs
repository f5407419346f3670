// --- File: crates/webicast_flow/src/logic.rs ---
//! Drives one webinar through provision → merge → notify.

use serde::Serialize;
use tracing::{info, warn};
use webicast_common::{Webinar, WebinarStatus};
use webicast_config::AppConfig;
use webicast_gcal::auth::HubType;
use webicast_gcal::logic::provision_meeting;
use webicast_mailer::dispatch::{send_notifications, NotificationResult};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Result of running one record through the pipeline. `success` means
/// every requested step completed; the merged record is always returned
/// so callers see how far it got.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FlowOutcome {
    pub webinar_id: String,
    pub success: bool,
    /// "real" or "demo" once provisioning ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    pub webinar: Webinar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FlowOutcome {
    fn failed(webinar: Webinar, error: String) -> Self {
        FlowOutcome {
            webinar_id: webinar.webinar_id.clone(),
            success: false,
            mode: None,
            webinar,
            notifications: None,
            error: Some(error),
        }
    }
}

/// Provisions a meeting for the record, merges the result, and
/// optionally sends both invitation emails.
///
/// A notification failure does not undo the scheduling: the record
/// keeps its scheduled status and the outcome reports the error.
pub async fn run_flow(
    config: &AppConfig,
    hub: Option<&HubType>,
    mut webinar: Webinar,
    notify: bool,
) -> FlowOutcome {
    if let Err(e) = webinar.validate_for_provisioning() {
        webinar.advance_status(WebinarStatus::Failed);
        return FlowOutcome::failed(webinar, e.to_string());
    }

    let outcome = match provision_meeting(hub, config.gcal.as_ref(), &webinar).await {
        Ok(outcome) => outcome,
        Err(e) => {
            webinar.advance_status(WebinarStatus::Failed);
            return FlowOutcome::failed(webinar, e.to_string());
        }
    };

    let mode = outcome.mode();
    let meeting = outcome.into_result();
    webinar.platform = Some(meeting.platform);
    webinar.meeting_id = Some(meeting.meeting_id);
    webinar.presenter_link = Some(meeting.presenter_link);
    webinar.attendee_link = Some(meeting.attendee_link);
    webinar.calendar_event_id = Some(meeting.calendar_event_id);
    webinar.html_link = Some(meeting.html_link);
    webinar.advance_status(meeting.status);

    info!(
        webinar_id = %webinar.webinar_id,
        mode,
        status = %webinar.status,
        "Webinar provisioned"
    );

    let (notifications, error) = if notify {
        let dispatch = match (config.use_smtp, config.smtp.as_ref()) {
            (false, _) => Err("SMTP service is disabled.".to_string()),
            (true, None) => Err(
                "Email configuration missing. Set WBC_SMTP__USER and WBC_SMTP__PASS.".to_string(),
            ),
            (true, Some(smtp)) => send_notifications(smtp, &webinar)
                .await
                .map_err(|e| e.to_string()),
        };
        match dispatch {
            Ok(result) => (Some(result), None),
            Err(message) => {
                // Scheduled stands; only the notification step failed
                warn!(
                    webinar_id = %webinar.webinar_id,
                    error = %message,
                    "Notification step failed for scheduled webinar"
                );
                (None, Some(message))
            }
        }
    } else {
        (None, None)
    };

    FlowOutcome {
        webinar_id: webinar.webinar_id.clone(),
        success: error.is_none(),
        mode: Some(mode),
        webinar,
        notifications,
        error,
    }
}

/// Runs the whole uploaded sequence, one record at a time.
///
/// Outcomes keep the input order and are independent: one record
/// failing never aborts the rest.
pub async fn run_bulk(
    config: &AppConfig,
    hub: Option<&HubType>,
    webinars: Vec<Webinar>,
    notify: bool,
) -> Vec<FlowOutcome> {
    let mut outcomes = Vec::with_capacity(webinars.len());
    for webinar in webinars {
        outcomes.push(run_flow(config, hub, webinar, notify).await);
    }
    outcomes
}
