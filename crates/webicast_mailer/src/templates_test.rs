// --- File: crates/webicast_mailer/src/templates_test.rs ---
use crate::templates::{
    attendee_email_html, attendee_subject, presenter_email_html, presenter_subject,
};
use webicast_common::{Contact, Webinar};

fn provisioned_webinar() -> Webinar {
    Webinar {
        webinar_id: "WEB-001".into(),
        name: "Digital Marketing Trends 2025".into(),
        date: "2025-07-20".into(),
        time: "10:00".into(),
        presenter: Contact {
            name: "John Smith".into(),
            email: "john.smith@company.com".into(),
            phone: None,
        },
        attendee: Contact {
            name: "Alice Johnson".into(),
            email: "alice.johnson@email.com".into(),
            phone: Some("+1-555-0201".into()),
        },
        meeting_id: Some("meet-WEB-001-123".into()),
        presenter_link: Some("https://meet.google.com/meet-WEB-001-123".into()),
        attendee_link: Some("https://meet.google.com/meet-WEB-001-123".into()),
        ..Webinar::default()
    }
}

#[test]
fn subjects_address_each_role() {
    let webinar = provisioned_webinar();
    assert_eq!(
        presenter_subject(&webinar),
        "🎯 Host Confirmation: Digital Marketing Trends 2025"
    );
    assert_eq!(
        attendee_subject(&webinar),
        "🎓 Webinar Invitation: Digital Marketing Trends 2025"
    );
}

#[test]
fn presenter_body_contains_details_and_links() {
    let webinar = provisioned_webinar();
    let start = webinar.start_instant().unwrap();
    let html = presenter_email_html(&webinar, start);

    assert!(html.contains("Hello <strong>John Smith</strong>"));
    assert!(html.contains("2025-07-20 10:00 UTC"));
    assert!(html.contains("WEB-001"));
    assert!(html.contains("Join Google Meet as Host"));
    assert!(html.contains("https://meet.google.com/meet-WEB-001-123"));
    // Calendar deep link with the one-hour window
    assert!(html.contains("https://calendar.google.com/calendar/render?"));
    assert!(html.contains("20250720T100000Z%2F20250720T110000Z"));
    // Attendee contact details visible to the host
    assert!(html.contains("alice.johnson@email.com"));
    assert!(html.contains("+1-555-0201"));
}

#[test]
fn attendee_body_names_the_presenter() {
    let webinar = provisioned_webinar();
    let start = webinar.start_instant().unwrap();
    let html = attendee_email_html(&webinar, start);

    assert!(html.contains("Hello <strong>Alice Johnson</strong>"));
    assert!(html.contains("🎤 Presenter:</strong> John Smith"));
    assert!(html.contains("Join Google Meet"));
}

#[test]
fn unprovisioned_record_renders_without_join_block() {
    let mut webinar = provisioned_webinar();
    webinar.meeting_id = None;
    webinar.presenter_link = None;
    webinar.attendee_link = None;
    let start = webinar.start_instant().unwrap();

    let html = attendee_email_html(&webinar, start);
    assert!(!html.contains("Join Google Meet"));
    assert!(!html.contains("Meeting ID:"));
    // Calendar link still renders, with the placeholder location
    assert!(html.contains("Online+Meeting") || html.contains("Online%20Meeting"));
}
