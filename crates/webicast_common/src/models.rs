// --- File: crates/webicast_common/src/models.rs ---
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WebicastError;

/// Fixed webinar length; the scheduling form carries no duration field.
pub const WEBINAR_DURATION_MINUTES: i64 = 60;

/// A person attached to a webinar (presenter or attendee).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Lifecycle state of a webinar record.
///
/// Transitions are monotonic: once a record leaves `Pending` it never
/// reverts. A notification failure after scheduling leaves the record
/// scheduled, with the failure reported separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum WebinarStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "scheduled")]
    Scheduled,
    #[serde(rename = "scheduled (demo)")]
    ScheduledDemo,
    #[serde(rename = "failed")]
    Failed,
}

impl WebinarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebinarStatus::Pending => "pending",
            WebinarStatus::Scheduled => "scheduled",
            WebinarStatus::ScheduledDemo => "scheduled (demo)",
            WebinarStatus::Failed => "failed",
        }
    }

    /// Whether moving to `next` respects the monotonic lifecycle.
    /// `Pending` may advance anywhere; settled states only stay put.
    pub fn may_advance_to(&self, next: WebinarStatus) -> bool {
        match self {
            WebinarStatus::Pending => true,
            settled => *settled == next,
        }
    }
}

impl std::fmt::Display for WebinarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The webinar record, the only domain entity.
///
/// `date` is a calendar date (`YYYY-MM-DD`) and `time` a wall-clock
/// (`HH:MM`); the pair is interpreted as UTC. The post-provisioning
/// fields stay absent until the Meeting Provisioner fills them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Webinar {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub webinar_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub presenter: Contact,
    #[serde(default)]
    pub attendee: Contact,
    #[serde(default)]
    pub status: WebinarStatus,

    // Post-provisioning fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendee_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}

impl Webinar {
    /// Combines `date` and `time` into the UTC start instant.
    pub fn start_instant(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        let naive = NaiveDateTime::parse_from_str(
            &format!("{} {}", self.date.trim(), self.time.trim()),
            "%Y-%m-%d %H:%M",
        )?;
        Ok(naive.and_utc())
    }

    /// Start of the implicit one-hour window after the webinar begins.
    pub fn end_instant(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        Ok(self.start_instant()? + Duration::minutes(WEBINAR_DURATION_MINUTES))
    }

    /// Checks the fields provisioning needs: a name, a date, a time, and a
    /// non-empty name/email for both roles.
    pub fn validate_for_provisioning(&self) -> Result<(), WebicastError> {
        let mut missing: Vec<&str> = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.date.trim().is_empty() {
            missing.push("date");
        }
        if self.time.trim().is_empty() {
            missing.push("time");
        }
        if self.presenter.name.trim().is_empty() {
            missing.push("presenter.name");
        }
        if self.presenter.email.trim().is_empty() {
            missing.push("presenter.email");
        }
        if self.attendee.name.trim().is_empty() {
            missing.push("attendee.name");
        }
        if self.attendee.email.trim().is_empty() {
            missing.push("attendee.email");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WebicastError::ValidationError(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Applies a status transition, ignoring moves the lifecycle forbids.
    pub fn advance_status(&mut self, next: WebinarStatus) {
        if self.status.may_advance_to(next) {
            self.status = next;
        } else {
            tracing::debug!(
                current = %self.status,
                rejected = %next,
                webinar_id = %self.webinar_id,
                "Ignoring status transition that would revert a settled record"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn valid_webinar() -> Webinar {
        Webinar {
            id: "1".into(),
            webinar_id: "WEB-001".into(),
            name: "Demo".into(),
            date: "2025-07-20".into(),
            time: "10:00".into(),
            presenter: Contact {
                name: "A".into(),
                email: "a@x.com".into(),
                phone: None,
            },
            attendee: Contact {
                name: "B".into(),
                email: "b@x.com".into(),
                phone: None,
            },
            ..Webinar::default()
        }
    }

    #[test]
    fn status_serializes_with_legacy_strings() {
        assert_eq!(
            serde_json::to_string(&WebinarStatus::ScheduledDemo).unwrap(),
            "\"scheduled (demo)\""
        );
        let parsed: WebinarStatus = serde_json::from_str("\"scheduled (demo)\"").unwrap();
        assert_eq!(parsed, WebinarStatus::ScheduledDemo);
    }

    #[test]
    fn status_never_reverts_once_settled() {
        assert!(WebinarStatus::Pending.may_advance_to(WebinarStatus::Scheduled));
        assert!(WebinarStatus::Pending.may_advance_to(WebinarStatus::Failed));
        assert!(!WebinarStatus::Scheduled.may_advance_to(WebinarStatus::Pending));
        assert!(!WebinarStatus::Scheduled.may_advance_to(WebinarStatus::Failed));
        assert!(WebinarStatus::ScheduledDemo.may_advance_to(WebinarStatus::ScheduledDemo));

        let mut webinar = valid_webinar();
        webinar.advance_status(WebinarStatus::ScheduledDemo);
        webinar.advance_status(WebinarStatus::Pending);
        assert_eq!(webinar.status, WebinarStatus::ScheduledDemo);
    }

    #[test]
    fn start_instant_interprets_date_time_as_utc() {
        let webinar = valid_webinar();
        let start = webinar.start_instant().unwrap();
        assert_eq!(start.to_rfc3339(), "2025-07-20T10:00:00+00:00");
        let end = webinar.end_instant().unwrap();
        assert_eq!(end.hour(), 11);
    }

    #[test]
    fn start_instant_rejects_malformed_input() {
        let mut webinar = valid_webinar();
        webinar.date = "not-a-date".into();
        assert!(webinar.start_instant().is_err());
    }

    #[test]
    fn validation_names_every_missing_field() {
        let mut webinar = valid_webinar();
        assert!(webinar.validate_for_provisioning().is_ok());

        webinar.presenter.email = "  ".into();
        webinar.attendee.name = String::new();
        let err = webinar.validate_for_provisioning().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("presenter.email"));
        assert!(message.contains("attendee.name"));
        assert!(!message.contains("presenter.name"));
    }

    #[test]
    fn record_round_trips_with_camel_case_keys() {
        let json = r#"{
            "webinarId": "WEB-001",
            "name": "Demo",
            "date": "2025-07-20",
            "time": "10:00",
            "presenter": {"name": "A", "email": "a@x.com"},
            "attendee": {"name": "B", "email": "b@x.com"}
        }"#;
        let webinar: Webinar = serde_json::from_str(json).unwrap();
        assert_eq!(webinar.webinar_id, "WEB-001");
        assert_eq!(webinar.status, WebinarStatus::Pending);
        assert!(webinar.presenter_link.is_none());

        let out = serde_json::to_value(&webinar).unwrap();
        assert_eq!(out["webinarId"], "WEB-001");
        assert_eq!(out["status"], "pending");
        // Absent provisioning fields stay absent, not null
        assert!(out.get("presenterLink").is_none());
    }
}
