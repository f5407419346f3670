// --- File: crates/webicast_mailer/src/dispatch.rs ---
//! SMTP delivery of the two invitation emails.

use chrono::{SecondsFormat, Utc};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use webicast_common::Webinar;
use webicast_config::SmtpConfig;

use crate::templates::{
    attendee_email_html, attendee_subject, presenter_email_html, presenter_subject,
};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Email configuration missing: {0}")]
    Config(String),
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("SMTP server {0} refused the connection check")]
    Verify(String),
    #[error("Failed to parse webinar date/time: {0}")]
    TimeParse(#[from] chrono::ParseError),
    #[error("Webinar has no meeting link yet; provision it before sending notifications")]
    MissingLink,
}

/// Delivery record for one recipient.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EmailDispatchReceipt {
    pub to: String,
    pub message_id: String,
    pub sent: bool,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Both receipts; present only when both sends succeeded.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct NotificationResult {
    pub presenter_email_data: EmailDispatchReceipt,
    pub attendee_email_data: EmailDispatchReceipt,
}

/// Sends the host confirmation and the attendee invitation.
///
/// Checks preconditions before touching the network: credentials must be
/// configured and the webinar must already carry a meeting link. The
/// transport is verified first, then both emails go out concurrently;
/// either failure fails the whole call (both-or-nothing reporting, matching
/// the all-or-error response contract).
pub async fn send_notifications(
    smtp: &SmtpConfig,
    webinar: &Webinar,
) -> Result<NotificationResult, NotifyError> {
    let (user, pass) = smtp.credentials().ok_or_else(|| {
        NotifyError::Config(
            "SMTP credentials missing. Set WBC_SMTP__USER and WBC_SMTP__PASS.".to_string(),
        )
    })?;

    if webinar.presenter_link.is_none() {
        return Err(NotifyError::MissingLink);
    }

    let start = webinar.start_instant()?;

    let from_address = smtp
        .sender_address()
        .ok_or_else(|| NotifyError::Config("No sender address configured".to_string()))?;
    let from: Mailbox = format!("\"{}\" <{}>", smtp.sender_name(), from_address).parse()?;

    let presenter_message_id = format!("<{}@webicast>", Uuid::new_v4());
    let attendee_message_id = format!("<{}@webicast>", Uuid::new_v4());

    let presenter_email = Message::builder()
        .from(from.clone())
        .to(webinar.presenter.email.parse::<Mailbox>()?)
        .subject(presenter_subject(webinar))
        .message_id(Some(presenter_message_id.clone()))
        .header(ContentType::TEXT_HTML)
        .body(presenter_email_html(webinar, start))?;

    let attendee_email = Message::builder()
        .from(from)
        .to(webinar.attendee.email.parse::<Mailbox>()?)
        .subject(attendee_subject(webinar))
        .message_id(Some(attendee_message_id.clone()))
        .header(ContentType::TEXT_HTML)
        .body(attendee_email_html(webinar, start))?;

    let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
        .port(smtp.port)
        .credentials(Credentials::new(user.to_string(), pass.to_string()))
        .timeout(Some(std::time::Duration::from_secs(smtp.timeout_secs)))
        .build();

    // Verify the connection before composing receipts
    if !transport.test_connection().await? {
        return Err(NotifyError::Verify(smtp.host.clone()));
    }

    tokio::try_join!(
        transport.send(presenter_email),
        transport.send(attendee_email)
    )?;

    info!(
        webinar_id = %webinar.webinar_id,
        presenter = %webinar.presenter.email,
        attendee = %webinar.attendee.email,
        "Email notifications sent"
    );

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    Ok(NotificationResult {
        presenter_email_data: EmailDispatchReceipt {
            to: webinar.presenter.email.clone(),
            message_id: presenter_message_id,
            sent: true,
            timestamp: timestamp.clone(),
            kind: "presenter",
        },
        attendee_email_data: EmailDispatchReceipt {
            to: webinar.attendee.email.clone(),
            message_id: attendee_message_id,
            sent: true,
            timestamp,
            kind: "attendee",
        },
    })
}
