// --- File: crates/webicast_flow/src/logic_test.rs ---
use crate::logic::{run_bulk, run_flow};
use webicast_common::{Contact, Webinar, WebinarStatus};
use webicast_config::{AppConfig, SmtpConfig};

fn demo_webinar(webinar_id: &str) -> Webinar {
    Webinar {
        webinar_id: webinar_id.into(),
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

#[tokio::test]
async fn provision_without_notify_succeeds_in_demo_mode() {
    let config = AppConfig::default();
    let outcome = run_flow(&config, None, demo_webinar("WEB-001"), false).await;

    assert!(outcome.success);
    assert_eq!(outcome.mode, Some("demo"));
    assert_eq!(outcome.webinar.status, WebinarStatus::ScheduledDemo);
    assert!(outcome
        .webinar
        .presenter_link
        .as_deref()
        .unwrap()
        .starts_with("https://meet.google.com/meet-WEB-001-"));
    assert_eq!(outcome.webinar.presenter_link, outcome.webinar.attendee_link);
    assert!(outcome.notifications.is_none());
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn invalid_record_fails_without_provisioning() {
    let config = AppConfig::default();
    let mut webinar = demo_webinar("WEB-002");
    webinar.attendee.email = String::new();

    let outcome = run_flow(&config, None, webinar, false).await;

    assert!(!outcome.success);
    assert_eq!(outcome.webinar.status, WebinarStatus::Failed);
    assert!(outcome.webinar.meeting_id.is_none());
    assert!(outcome.error.as_deref().unwrap().contains("attendee.email"));
}

#[tokio::test]
async fn notify_without_smtp_config_keeps_record_scheduled() {
    // No smtp section at all
    let config = AppConfig::default();
    let outcome = run_flow(&config, None, demo_webinar("WEB-003"), true).await;

    assert!(!outcome.success);
    assert_eq!(outcome.webinar.status, WebinarStatus::ScheduledDemo);
    assert!(outcome.webinar.presenter_link.is_some());
    assert!(outcome.notifications.is_none());
    assert!(outcome.error.is_some());
}

#[tokio::test]
async fn notify_with_unconfigured_credentials_reports_the_error() {
    let config = AppConfig {
        smtp: Some(SmtpConfig::default()),
        ..AppConfig::default()
    };
    let outcome = run_flow(&config, None, demo_webinar("WEB-004"), true).await;

    assert!(!outcome.success);
    assert_eq!(outcome.webinar.status, WebinarStatus::ScheduledDemo);
    assert!(outcome.error.as_deref().unwrap().contains("WBC_SMTP__USER"));
}

#[tokio::test]
async fn bulk_outcomes_are_independent_and_ordered() {
    let config = AppConfig::default();
    let mut bad = demo_webinar("WEB-BAD");
    bad.date = "someday".into();

    let outcomes = run_bulk(
        &config,
        None,
        vec![demo_webinar("WEB-A"), bad, demo_webinar("WEB-C")],
        false,
    )
    .await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].webinar_id, "WEB-A");
    assert_eq!(outcomes[1].webinar_id, "WEB-BAD");
    assert_eq!(outcomes[2].webinar_id, "WEB-C");

    assert!(outcomes[0].success);
    assert!(!outcomes[1].success);
    assert_eq!(outcomes[1].webinar.status, WebinarStatus::Failed);
    // The bad record did not poison its neighbors
    assert!(outcomes[2].success);
    assert_eq!(outcomes[2].webinar.status, WebinarStatus::ScheduledDemo);
}

#[tokio::test]
async fn outcome_serialization_omits_absent_fields() {
    let config = AppConfig::default();
    let outcome = run_flow(&config, None, demo_webinar("WEB-005"), false).await;

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["webinarId"], "WEB-005");
    assert_eq!(json["mode"], "demo");
    assert!(json.get("notifications").is_none());
    assert!(json.get("error").is_none());
    assert_eq!(json["webinar"]["status"], "scheduled (demo)");
}
