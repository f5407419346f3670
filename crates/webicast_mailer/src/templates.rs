// --- File: crates/webicast_mailer/src/templates.rs ---
//! HTML invitation bodies for the presenter and attendee emails.
//!
//! Pure functions of the webinar record and its start instant. Times are
//! rendered in a fixed UTC format so the output does not depend on server
//! locale.

use chrono::{DateTime, Duration, Utc};
use webicast_common::{build_calendar_link, Webinar, WEBINAR_DURATION_MINUTES};

/// Human-readable timestamp used inside the email bodies.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn presenter_subject(webinar: &Webinar) -> String {
    format!("🎯 Host Confirmation: {}", webinar.name)
}

pub fn attendee_subject(webinar: &Webinar) -> String {
    format!("🎓 Webinar Invitation: {}", webinar.name)
}

/// Body of the host-confirmation email.
pub fn presenter_email_html(webinar: &Webinar, start: DateTime<Utc>) -> String {
    let scheduled_time = start.format(DATE_FORMAT);
    let end = start + Duration::minutes(WEBINAR_DURATION_MINUTES);

    let meet_link = webinar.presenter_link.as_deref();
    let calendar_link = build_calendar_link(
        &format!("Host: {}", webinar.name),
        start,
        end,
        &format!(
            "You are the host for this webinar.\n\nAttendee: {} ({})\n\nGoogle Meet: {}",
            webinar.attendee.name,
            webinar.attendee.email,
            meet_link.unwrap_or("Meeting link will be provided"),
        ),
        meet_link.unwrap_or("Online Meeting"),
    );

    let meeting_id_line = webinar
        .meeting_id
        .as_deref()
        .map(|id| format!("<p><strong>🎥 Meeting ID:</strong> {id}</p>"))
        .unwrap_or_default();

    let join_block = meet_link
        .map(|link| {
            format!(
                r#"<div style="background: #e6ffed; padding: 20px; border-left: 4px solid #28a745; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">🎥 Google Meet Link (HOST)</h3>
          <p style="text-align: center;">
            <a href="{link}"
               style="display: inline-block; background: #28a745; color: white; padding: 15px 30px;
                      text-decoration: none; border-radius: 5px; font-weight: bold; font-size: 16px;">
              🎥 Join Google Meet as Host
            </a>
          </p>
          <p><small>Click this link to start the meeting as the host.</small></p>
        </div>"#
            )
        })
        .unwrap_or_default();

    let attendee_phone = webinar.attendee.phone.as_deref().unwrap_or("not provided");

    format!(
        r#"<html>
      <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
        <h2 style="color: #2c5282;">🎯 Host Confirmation: {name}</h2>
        <p>Hello <strong>{presenter_name}</strong>,</p>
        <p>You are confirmed as the <strong>host/presenter</strong> for the following webinar:</p>

        <div style="background: #f7fafc; padding: 20px; border-left: 4px solid #4299e1; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">📅 Webinar Details</h3>
          <p><strong>📋 Name:</strong> {name}</p>
          <p><strong>📅 Date &amp; Time:</strong> {scheduled_time}</p>
          <p><strong>💻 Platform:</strong> Google Meet + Email Notifications</p>
          <p><strong>🆔 Webinar ID:</strong> {webinar_id}</p>
          {meeting_id_line}
        </div>

        {join_block}

        <div style="background: #e6fffa; padding: 20px; border-left: 4px solid #38b2ac; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">📅 Add to Google Calendar</h3>
          <p style="text-align: center;">
            <a href="{calendar_link}"
               style="display: inline-block; background: #4285f4; color: white; padding: 15px 30px;
                      text-decoration: none; border-radius: 5px; font-weight: bold; font-size: 16px;">
              📅 Add Host Event to Calendar
            </a>
          </p>
          <p><small>This will create a calendar event with all the details and send invites to the attendee.</small></p>
        </div>

        <div style="background: #fef5e7; padding: 20px; border-left: 4px solid #ed8936; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">👤 Attendee Information</h3>
          <p><strong>Name:</strong> {attendee_name}</p>
          <p><strong>Email:</strong> {attendee_email}</p>
          <p><strong>Phone:</strong> {attendee_phone}</p>
        </div>

        <div style="background: #fff5f5; padding: 20px; border-left: 4px solid #f56565; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">⚠️ Important Notes for Hosts</h3>
          <ul>
            <li>Click the Google Meet link above to start the meeting as host</li>
            <li>Click the calendar link to add this event to your Google Calendar</li>
            <li>The calendar event will automatically invite the attendee</li>
            <li>Join 10-15 minutes early to test your setup</li>
            <li>Make sure your camera and microphone are working</li>
          </ul>
        </div>

        <p>Best regards,<br><strong>Webinar Management System</strong></p>
      </body>
    </html>"#,
        name = webinar.name,
        presenter_name = webinar.presenter.name,
        webinar_id = webinar.webinar_id,
        attendee_name = webinar.attendee.name,
        attendee_email = webinar.attendee.email,
    )
}

/// Body of the attendee-invitation email.
pub fn attendee_email_html(webinar: &Webinar, start: DateTime<Utc>) -> String {
    let scheduled_time = start.format(DATE_FORMAT);
    let end = start + Duration::minutes(WEBINAR_DURATION_MINUTES);

    let meet_link = webinar.attendee_link.as_deref();
    let calendar_link = build_calendar_link(
        &format!("Attend: {}", webinar.name),
        start,
        end,
        &format!(
            "You are invited to attend this webinar.\n\nPresenter: {} ({})\n\nGoogle Meet: {}",
            webinar.presenter.name,
            webinar.presenter.email,
            meet_link.unwrap_or("Meeting link will be provided"),
        ),
        meet_link.unwrap_or("Online Meeting"),
    );

    let meeting_id_line = webinar
        .meeting_id
        .as_deref()
        .map(|id| format!("<p><strong>🎥 Meeting ID:</strong> {id}</p>"))
        .unwrap_or_default();

    let join_block = meet_link
        .map(|link| {
            format!(
                r#"<div style="background: #e6ffed; padding: 20px; border-left: 4px solid #28a745; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">🎥 Google Meet Link</h3>
          <p style="text-align: center;">
            <a href="{link}"
               style="display: inline-block; background: #28a745; color: white; padding: 15px 30px;
                      text-decoration: none; border-radius: 5px; font-weight: bold; font-size: 16px;">
              🎥 Join Google Meet
            </a>
          </p>
          <p><small>Click this link to join the webinar at the scheduled time.</small></p>
        </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<html>
      <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
        <h2 style="color: #2c5282;">🎓 Webinar Invitation: {name}</h2>
        <p>Hello <strong>{attendee_name}</strong>,</p>
        <p>You are invited to attend the following webinar:</p>

        <div style="background: #f7fafc; padding: 20px; border-left: 4px solid #4299e1; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">📅 Webinar Details</h3>
          <p><strong>📋 Name:</strong> {name}</p>
          <p><strong>📅 Date &amp; Time:</strong> {scheduled_time}</p>
          <p><strong>💻 Platform:</strong> Google Meet + Email Notifications</p>
          <p><strong>🎤 Presenter:</strong> {presenter_name}</p>
          {meeting_id_line}
        </div>

        {join_block}

        <div style="background: #e6fffa; padding: 20px; border-left: 4px solid #38b2ac; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">📅 Add to Google Calendar</h3>
          <p style="text-align: center;">
            <a href="{calendar_link}"
               style="display: inline-block; background: #4285f4; color: white; padding: 15px 30px;
                      text-decoration: none; border-radius: 5px; font-weight: bold; font-size: 16px;">
              📅 Add to My Calendar
            </a>
          </p>
          <p><small>This will add the webinar to your Google Calendar with all the details.</small></p>
        </div>

        <div style="background: #fef5e7; padding: 20px; border-left: 4px solid #ed8936; margin: 20px 0;">
          <h3 style="margin-top: 0; color: #2d3748;">📝 Instructions</h3>
          <ul>
            <li>Click the Google Meet link above to join the webinar</li>
            <li>Click the calendar link to save this event to your calendar</li>
            <li>You'll receive calendar reminders before the webinar</li>
            <li>Join 5 minutes before the scheduled time</li>
            <li>Make sure your camera and microphone are ready</li>
          </ul>
        </div>

        <p>We look forward to your participation!</p>
        <p>Best regards,<br><strong>Webinar Management System</strong></p>
      </body>
    </html>"#,
        name = webinar.name,
        attendee_name = webinar.attendee.name,
        presenter_name = webinar.presenter.name,
    )
}
