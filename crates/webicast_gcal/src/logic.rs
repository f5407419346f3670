// --- File: crates/webicast_gcal/src/logic.rs ---
use crate::auth::HubType; // Use the specific Hub type alias
use chrono::{DateTime, SecondsFormat, Utc};
use google_calendar3::api::{
    ConferenceData, ConferenceSolutionKey, CreateConferenceRequest, Event, EventAttendee,
    EventDateTime, EventReminder, EventReminders,
};
use serde::Serialize;
use tracing::{info, warn};
use webicast_common::{Webinar, WebinarStatus};
use webicast_config::GcalConfig;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;

/// Provisioning only fails on input the caller got past validation:
/// a date/time pair that does not parse. Provider trouble falls open
/// to a demo meeting instead of surfacing here.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Failed to parse webinar date/time: {0}")]
    TimeParse(#[from] chrono::ParseError),
}

/// Failures internal to the real-event attempt. Never escape
/// `provision_meeting`; they are logged and answered with a demo result.
#[derive(Error, Debug)]
enum InsertError {
    #[error("Google API Error: {0}")]
    Api(#[from] google_calendar3::Error),
    #[error("Calendar insert timed out after {0}s")]
    Timeout(u64),
    #[error("Created event is missing {0}")]
    MissingField(&'static str),
}

pub const PLATFORM: &str = "Google Meet";

// --- Data Structures ---

/// What provisioning produced, ready to merge into the webinar record.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MeetingResult {
    pub platform: String,
    pub meeting_id: String,
    pub presenter_link: String,
    pub attendee_link: String,
    pub calendar_event_id: String,
    pub status: WebinarStatus,
    pub start_time: String, // ISO 8601 format
    pub end_time: String,   // ISO 8601 format
    pub html_link: String,
}

/// A provisioned meeting, tagged by where it came from: a real Calendar
/// event, or a synthesized demo stand-in.
#[derive(Debug, Clone)]
pub enum MeetingOutcome {
    Real(MeetingResult),
    Demo(MeetingResult),
}

impl MeetingOutcome {
    pub fn result(&self) -> &MeetingResult {
        match self {
            MeetingOutcome::Real(r) | MeetingOutcome::Demo(r) => r,
        }
    }

    pub fn into_result(self) -> MeetingResult {
        match self {
            MeetingOutcome::Real(r) | MeetingOutcome::Demo(r) => r,
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            MeetingOutcome::Real(_) => "real",
            MeetingOutcome::Demo(_) => "demo",
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, MeetingOutcome::Demo(_))
    }
}

// --- Provisioning Logic ---

/// Provisions a meeting for the webinar.
///
/// Attempts a real Calendar event when a hub and refresh token are
/// available; any provider failure is logged and answered with a demo
/// meeting so callers always receive a usable result. Only an
/// unparseable date/time is an error.
pub async fn provision_meeting(
    hub: Option<&HubType>,
    config: Option<&GcalConfig>,
    webinar: &Webinar,
) -> Result<MeetingOutcome, ProvisionError> {
    let start = webinar.start_instant()?;
    let end = webinar.end_instant()?;

    if let (Some(hub), Some(cfg)) = (hub, config) {
        if cfg.has_refresh_token() {
            match insert_meet_event(hub, cfg, webinar, start, end).await {
                Ok(result) => {
                    info!(
                        webinar_id = %webinar.webinar_id,
                        event_id = %result.calendar_event_id,
                        "Created real Google Meet event"
                    );
                    return Ok(MeetingOutcome::Real(result));
                }
                Err(err) => {
                    warn!(
                        webinar_id = %webinar.webinar_id,
                        error = %err,
                        "Failed to create real Google Calendar event, falling back to demo meeting"
                    );
                }
            }
        }
    }

    Ok(MeetingOutcome::Demo(demo_meeting(webinar, start, end)))
}

/// Synthesizes a stand-in meeting with the same shape a real one has.
fn demo_meeting(webinar: &Webinar, start: DateTime<Utc>, end: DateTime<Utc>) -> MeetingResult {
    let meeting_id = format!(
        "meet-{}-{}",
        webinar.webinar_id,
        Utc::now().timestamp_millis()
    );
    let meet_link = format!("https://meet.google.com/{meeting_id}");

    MeetingResult {
        platform: PLATFORM.to_string(),
        calendar_event_id: format!("cal-{meeting_id}"),
        html_link: format!("https://calendar.google.com/calendar/event?eid={meeting_id}"),
        presenter_link: meet_link.clone(),
        attendee_link: meet_link,
        meeting_id,
        status: WebinarStatus::ScheduledDemo,
        start_time: start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end_time: end.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// Inserts a Calendar event with an attached Meet conference and invites
/// both participants (`sendUpdates=all`).
async fn insert_meet_event(
    hub: &HubType,
    config: &GcalConfig,
    webinar: &Webinar,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<MeetingResult, InsertError> {
    let description = format!(
        "Webinar: {}\nPresenter: {} ({})\nAttendee: {} ({})",
        webinar.name,
        webinar.presenter.name,
        webinar.presenter.email,
        webinar.attendee.name,
        webinar.attendee.email,
    );

    let event = Event {
        summary: Some(webinar.name.clone()),
        description: Some(description),
        start: Some(EventDateTime {
            date_time: Some(start),
            time_zone: Some("UTC".to_string()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(end),
            time_zone: Some("UTC".to_string()),
            ..Default::default()
        }),
        attendees: Some(vec![
            EventAttendee {
                email: Some(webinar.presenter.email.clone()),
                display_name: Some(webinar.presenter.name.clone()),
                ..Default::default()
            },
            EventAttendee {
                email: Some(webinar.attendee.email.clone()),
                display_name: Some(webinar.attendee.name.clone()),
                ..Default::default()
            },
        ]),
        conference_data: Some(ConferenceData {
            create_request: Some(CreateConferenceRequest {
                request_id: Some(format!(
                    "webinar-{}-{}",
                    webinar.webinar_id,
                    Utc::now().timestamp_millis()
                )),
                conference_solution_key: Some(ConferenceSolutionKey {
                    type_: Some("hangoutsMeet".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        reminders: Some(EventReminders {
            use_default: Some(false),
            overrides: Some(vec![
                EventReminder {
                    method: Some("email".to_string()),
                    minutes: Some(24 * 60),
                    ..Default::default()
                },
                EventReminder {
                    method: Some("popup".to_string()),
                    minutes: Some(15),
                    ..Default::default()
                },
            ]),
        }),
        ..Default::default()
    };

    let insert = hub
        .events()
        .insert(event, &config.calendar_id)
        .conference_data_version(1)
        .send_updates("all")
        .doit();

    let timeout_secs = config.request_timeout_secs;
    let (_, created) =
        tokio::time::timeout(std::time::Duration::from_secs(timeout_secs), insert)
            .await
            .map_err(|_| InsertError::Timeout(timeout_secs))??;

    let event_id = created.id.clone().ok_or(InsertError::MissingField("id"))?;

    // Prefer the hangout link; fall back to the first conference entry point
    let meet_link = created
        .hangout_link
        .clone()
        .or_else(|| {
            created
                .conference_data
                .as_ref()
                .and_then(|cd| cd.entry_points.as_ref())
                .and_then(|eps| eps.first())
                .and_then(|ep| ep.uri.clone())
        })
        .ok_or(InsertError::MissingField("conference entry point"))?;

    let start_time = created
        .start
        .as_ref()
        .and_then(|s| s.date_time)
        .unwrap_or(start)
        .to_rfc3339_opts(SecondsFormat::Secs, true);
    let end_time = created
        .end
        .as_ref()
        .and_then(|e| e.date_time)
        .unwrap_or(end)
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    Ok(MeetingResult {
        platform: PLATFORM.to_string(),
        meeting_id: event_id.clone(),
        presenter_link: meet_link.clone(),
        attendee_link: meet_link,
        calendar_event_id: event_id,
        status: WebinarStatus::Scheduled,
        start_time,
        end_time,
        html_link: created.html_link.unwrap_or_default(),
    })
}
